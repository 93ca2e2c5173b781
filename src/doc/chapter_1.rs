/*!
# Expressions

Every value is a 32-bit signed integer. Arithmetic wraps around instead
of overflowing, and division truncates toward zero.

Variable names are letters, digits, and underbars that do not start with
a digit. Names are case sensitive and must not be one of the keywords.
A variable exists once something has been assigned to it; using it
before that is a `VARIABLE NOT DEFINED` error.

```text
LET COUNT_2 = 7
PRINT COUNT_2 / 2
3
```

## Operators

From lowest to highest precedence:

| Operator | Meaning |
|---|---|
| `=` | assign the right side to the variable on the left |
| `+` `-` | add, subtract |
| `*` `/` | multiply, divide |

Operators of the same precedence group left to right. Parentheses
override precedence. A leading `-` negates the single term that follows,
so `-3+5` is `2`.

Assignment inside an expression yields the assigned value. The left side
must be a plain variable.

```text
PRINT (A = 4) * 2
8
PRINT A
4
PRINT 7 / 0
?DIVIDE BY ZERO
```

## Comparisons

`<`, `=`, and `>` only appear between the two sides of an `IF`.

*/
