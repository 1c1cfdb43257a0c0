//! Blin (Binary Line) is a tokenizer and tree-walking interpreter for the
//! esolang Blin. The only value is the Boolean bit, pushed with `+`/`-`
//! literals and combined on a shared evaluation stack; control flow and
//! output are spelled directly in the token stream with `_` as the one
//! block delimiter.
//!
//! # Example
//!
//! ```text
//! @$# prints "Hi" #$@
//! .-+--+---
//! .-++-+--+
//! ```
//!
//! # Operators
//!
//! | Token   | Needs | Brief   |
//! |---------|-------|---------|
//! | `+`     | -     | Push true. |
//! | `-`     | -     | Push false. |
//! | `!`     | 1     | Pop a value and push its negation. |
//! | `&`     | 2     | Pop `b` then `a`, push `a AND b`. |
//! | `\|`    | 2     | Pop `b` then `a`, push `a OR b`. |
//! | `^`     | 2     | Pop `b` then `a`, push `a XOR b`. |
//! | `?`     | 1     | Pop the condition; run the tokens up to the next `_` if true, else the tokens up to the `_` after that. |
//! | `*`     | 1     | Run the tokens up to the next `_` while the stack's top is true, popping one value per iteration. |
//! | `.`     | -     | Pack the next 8 `+`/`-` tokens MSB-first into one output byte. |
//! | `_`     | -     | Block delimiter; a no-op on its own. |
//! | `{Bin}` | -     | Dump the not-yet-dumped tokens before this point as a `1`/`0`/space line. |
//!
//! Comments run from `@$#` to `#$@` and do not nest. Whitespace separates
//! tokens and is otherwise ignored; `_` is a real token despite looking
//! like spacing.
//!
//! # Important notes
//!
//! - An operator whose stack precondition fails aborts only the rest of the
//!   block it appears in; the enclosing block and the run carry on.
//! - There are no variables, procedures, or numbers beyond single bits and
//!   their packing into output bytes.

pub mod error;
pub mod interp;
pub mod lexer;
pub mod token;
