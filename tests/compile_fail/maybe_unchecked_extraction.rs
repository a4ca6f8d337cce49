//! Unchecked extraction is not part of the public API.

use maybe::optional::Maybe;

fn main() {
    let _ = Maybe::present(1).expect_present("x");
    let _ = Maybe::present(2).unwrap();
}
