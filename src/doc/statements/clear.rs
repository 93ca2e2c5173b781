/*!
# `CLEAR`

## Purpose
Erase the stored program and every variable.

## Remarks
Only valid without a line number.

## Example
```text
10 PRINT 1
LET A = 5
CLEAR
LIST
PRINT A
?VARIABLE NOT DEFINED
```

*/
