/*!
# `LET <variable> = <expression>`

## Purpose
Assign a value to the variable.

## Remarks
The word `LET` is required. Inside an expression `=` also assigns and
yields the assigned value, so `LET A = B = 3` sets both.

## Example
```text
10 LET A = 10
20 PRINT A
30 LET A = B = A + 1
40 PRINT B
RUN
10
11
```

*/
