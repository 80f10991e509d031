//! Equivalence checking for math answers.
//!
//! This crate decides whether two expressions read by [`equiv_parser`] mean the same thing, and
//! whether the second is written the way it should be. The entry point is [`compare`]:
//!
//! ```
//! use equiv_compute::{compare, CompareOptions, Message};
//! use equiv_parser::{parse, ParseOptions};
//!
//! let parse = |source| parse(source, &ParseOptions::default()).expr.unwrap();
//! let options = CompareOptions { form: false, simplify: true };
//!
//! assert!(compare(&parse("2(x + 1)"), &parse("2x + 2"), &options).equal);
//!
//! let result = compare(&parse("2x + 2"), &parse("2(x + 1)"), &options);
//! assert_eq!(result.message, Some(Message::NotSimplified));
//! ```
//!
//! The building blocks are exposed as well:
//!
//! - [`symbolic`]: normalization and rule-based simplification of expression trees.
//! - [`numerical`]: evaluation of expressions at sampled points.
//! - [`equality`]: semantic equality, combining the two.
//!
//! # Logging
//!
//! Decisions made along the way (simplification passes, discarded samples, failed checks) are
//! logged with [`tracing`]. This crate never installs a subscriber.
//!
//! # Features
//!
//! - `serde`: Derives [`Serialize`] for comparison results, and [`Deserialize`] for
//!   [`CompareOptions`].
//!
//! [`Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html

pub mod compare;
pub mod equality;
pub mod numerical;
pub mod primitive;
pub mod symbolic;

pub use compare::{compare, compare_with, CompareOptions, Comparison, Message};
