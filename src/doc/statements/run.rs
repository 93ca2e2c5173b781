/*!
# `RUN`

## Purpose
Execute the stored program from its lowest numbered line.

## Remarks
Variables are not cleared. Running an empty program does nothing.
Stop a running program with CTRL-C.

## Example
```text
LET A = 4
10 PRINT A
RUN
4
```

*/
