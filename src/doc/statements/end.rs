/*!
# `END`

## Purpose
Stop the program.

## Remarks
A program also stops after its highest numbered line.
Variables keep their values after `END`.

## Example
```text
10 PRINT 1
20 END
30 PRINT 2
RUN
1
```

*/
