/*!
# `REM <anything>`

## Purpose
A remark. The rest of the line is ignored.

## Remarks
Only valid in a numbered line.

## Example
```text
10 REM THIS IS IGNORED = ( 1
```

*/
