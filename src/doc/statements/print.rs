/*!
# `PRINT <expression>`

## Purpose
Print the value of an expression followed by a new line.

## Example
```text
PRINT 1 + 2 * 3
7
PRINT (1 + 2) * 3
9
```

*/
