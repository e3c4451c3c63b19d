//! # CLI Module
//!
//! Entry points behind the `coverflow` subcommands. Each one takes loaded
//! [`Settings`](crate::config::Settings), prints start-up information through
//! the crate's console macros and runs a server until the process stops.
//!
//! - [`auth`] - The Spotify authorization server (`/login`, `/callback`,
//!   `/refresh_token`)
//! - [`player`] - The coverflow page with `/albums` and `/play`
//!
//! ```bash
//! coverflow auth --open          # authorize a Spotify account
//! coverflow player               # serve the coverflow page
//! ```

mod auth;
mod player;

pub use auth::auth;
pub use player::player;
