//! Core transforms for `cfgform`.
//!
//! A config file is a sequence of lines: `# comment`, `key=value`, or
//! free-form text. This crate classifies those lines and provides the two
//! processing modes on top:
//! - render mode ([`FormRenderer`]): emit an HTML form fragment, with
//!   accumulated comment text preceding each input field;
//! - request mode ([`rewrite_line`]): emit an updated config file with
//!   values overridden from decoded CGI request parameters
//!   ([`RequestParams`]).
//!
//! The small encoders and decoders ([`html_encode`], [`shell_quote`],
//! [`shell_unquote`]) are pure string transforms with no shared state.

pub mod escape;
pub mod quote;
pub mod render;
pub mod request;

pub use escape::{html_encode, html_encode_into};
pub use quote::{shell_quote, shell_unquote};
pub use render::{rewrite_line, ConfigLine, FormRenderer, Rewrite};
pub use request::RequestParams;
