/*!
# Introductory Tutorial

Run the executable with no arguments to start an interactive session, or
give it the path of a script to run that script and exit.

```text
exec
exec countdown.txt
exec --max-steps 100000 countdown.txt
```

A script is plain text with one statement per line. Words are separated
by spaces. There are no string literals and no statements spanning
lines. A line whose first word starts with `//` is a comment.

```text
// my first script
integer x
x = 5
print x
```

Running it prints `5`.

In the interactive session every line you type is appended to the
program in memory. Nothing executes until you type `run`.

```text
> integer x
> x = 5
> print x
> run
5
> list
   0 integer x
   1 x = 5
   2 print x
```

The other session commands are `new` to forget the program,
`load <file>` to replace it with a script from disk, and `save <file>`
to write it out. Press CTRL-D to leave.

## Errors

Any error stops the program. The report names the line, counting the
first line as line 0, followed by what went wrong.

```text
integer x
integer x
```
```text
Error on line 1
Variable with the name "x" is already declared!
```

Use `exit` to stop a program early without an error.
*/
