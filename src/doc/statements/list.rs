/*!
# `LIST`

## Purpose
Print the stored program in line number order.

## Remarks
Lines are printed exactly as they were typed. At the prompt, typing a
line number followed by TAB brings that line back for editing.

## Example
```text
20 PRINT 2
10 PRINT 1
LIST
10 PRINT 1
20 PRINT 2
```

*/
