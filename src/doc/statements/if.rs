/*!
# `IF <expression> <comparator> <expression> THEN <line number>`

## Purpose
Jump to a line when a comparison holds.

## Remarks
The comparator is one of `<`, `=`, or `>`. The first comparator that is
not inside parentheses splits the two sides, so an assignment may appear
on either side when it is parenthesized. When the comparison fails
execution continues with the next line. Only valid in a numbered line.

## Example
```text
10 LET X = 5
20 IF X > 3 THEN 40
30 PRINT 0
40 PRINT X
RUN
5
```

*/
