/*!
# Variables and Expressions

There are three data types. A variable must be declared with its type
before it is used and starts out as zero.

```text
integer count
logical done
real ratio
```

An `integer` is a signed 32-bit number, a `logical` is `true` or `false`
and a `real` is a 64-bit floating point number.

Names use the characters `a-z`, `A-Z`, `0-9` and `_`, and may not be one
of the reserved words:
`and break continue else end exit false if integer logical not or pop
print push real sqrt true while`.

No two live variables may share a name, even in different scopes.

## Assignment

The right hand side of `=` is a variable of exactly the same type or a
literal of the target's type. A logical can't be given `7`, and an
integer can't be given a real variable.

```text
count = 10
done = true
ratio = 0.25
```

## Operators

A binary expression takes exactly two operands separated by spaces.

| Operands | Operators | Result |
|---|---|---|
| integer | `+ - * /` | integer |
| real | `+ - * /` | real |
| integer, real | `== != < > <= >=` | logical |
| logical | `and or == !=` | logical |

```text
count = count * 2
done = count >= 20
```

Integer division truncates toward zero. Dividing by zero is an error,
as is integer overflow.

## Conversions

`not`, `sqrt` and the three type names work on a single operand.

```text
done = not done
ratio = sqrt 2.25
count = integer ratio
done = logical count
ratio = real done
```

Converting a real to an integer truncates toward zero. Numbers convert
to a logical that is true when they are not zero, and logicals convert
to 1 or 0.

## Output

`print` takes one variable.

```text
print count
```
*/
