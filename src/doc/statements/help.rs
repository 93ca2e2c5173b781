/*!
# `HELP`

## Purpose
Print a short summary of the statements and commands.

*/
