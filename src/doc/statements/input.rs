/*!
# `INPUT <variable>`

## Purpose
Read an integer typed at the terminal into a variable.

## Remarks
The prompt is ` ? `. The answer may have surrounding spaces and a leading
`-` but nothing else. Anything else prints `INVALID NUMBER` and asks
again. CTRL-C while waiting stops the program.

## Example
```text
10 INPUT N
20 PRINT N * N
RUN
 ? 1.5
INVALID NUMBER
 ? -4
16
```

*/
