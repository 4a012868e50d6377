#![allow(missing_docs)]

mod mpeg;
mod organize;
mod util;
