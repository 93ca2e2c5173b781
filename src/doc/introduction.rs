/*!
# Introductory Tutorial

Start the interpreter from a terminal. It waits for a line of input.
Type CTRL-D or `QUIT` to leave.

A line without a line number runs immediately.

<pre><code>&nbsp;> PRINT 6 * 7
&nbsp;  42
</code></pre>

Put a line number in front of a statement to store it instead.
Line numbers may be any value from 0 to 4294967295 and decide the order
lines run in, not the order they were typed.

<pre><code>&nbsp;> 20 PRINT X * X
&nbsp;> 10 INPUT X
&nbsp;> LIST
&nbsp;  10 INPUT X
&nbsp;  20 PRINT X * X
&nbsp;> RUN
&nbsp;   ? 12
&nbsp;  144
</code></pre>

Typing a line number that is already stored replaces that line. Typing
a line number by itself deletes it. Type the number and press TAB to
bring a stored line back for editing.

<pre><code>&nbsp;> 20<i>{TAB}</i>
&nbsp;> 20 PRINT X * X
</code></pre>

Errors are printed in bold. Errors found while a program runs name the
line they happened on.

<pre><code>&nbsp;> 30 GOTO 100
&nbsp;> RUN
&nbsp;   ? 3
&nbsp;  9
&nbsp;  <b>?LINE NUMBER ERROR IN 30</b>
</code></pre>

A program that never ends can be stopped with CTRL-C.

<pre><code>&nbsp;> 30 GOTO 10
&nbsp;> RUN
&nbsp;   ? <i>{CTRL-C}</i>
&nbsp;  <b>?BREAK IN 10</b>
</code></pre>

A program saved in a text file can be loaded when the interpreter starts,
and run right away with `--run`.

```text
basic countdown.bas --run
```

Set `RUST_LOG=debug` to see each run start, jump, and halt on stderr,
or `RUST_LOG=trace` to see every statement executed.

*/
