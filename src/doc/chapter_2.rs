/*!
# Scopes and Blocks

A block opens a scope. Variables declared inside a scope disappear when
it closes. `push` and `pop` open and close a bare scope.

```text
push
integer temp
pop
// temp no longer exists here
```

## `IF <condition>` ... `ELSE` ... `END`

The condition is a logical variable or literal, `not` followed by one, or a
comparison of two operands. `else` is optional.

```text
if count > 3
print count
else
print done
end
```

## `WHILE <condition>` ... `END`

The condition is checked again every time execution reaches `end`.

```text
integer i
while i < 3
i = i + 1
print i
end
```

## `BREAK` and `CONTINUE`

`break` leaves the innermost open block and resumes after its `end`.
`break 2` leaves two blocks, which is how to get out of a loop from
inside an `if`. Every kind of block counts, `push` included.

`continue` also unwinds blocks, but resumes on the `end` of the last
one, so a `while` checks its condition again.

```text
while true
i = i + 1
if i == 10
break 2
end
end
```

## Remarks

Blocks are matched by position. The interpreter scans forward counting
`if`, `while` and `push` against `end` and `pop`; it has no separate
parse step. An `end` that closes a `push`, or an `else` outside an `if`,
is an error.
*/
