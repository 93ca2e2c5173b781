/*!
# `QUIT`

## Purpose
Leave the interpreter. CTRL-D at the prompt does the same.

*/
