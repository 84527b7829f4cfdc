//! # TODO Harness
//!
//! Scan a source tree for `// TODO` annotations and query them from an
//! interactive prompt.
//!
//! Annotations follow a loose `user; YYYY-MM-DD; comment` shape. Any part
//! may be missing, and a `!` anywhere marks the item as important.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
//! │ Collector  │──▶│ Extract  │──▶│  Fields  │──▶│ TodoSet  │
//! │ walkdir    │   │ // TODO  │   │ user/date│   │(immutable│
//! └────────────┘   └──────────┘   └──────────┘   └────┬─────┘
//!                                                     │
//!                                   ┌─────────────────┤
//!                                   ▼                 ▼
//!                              ┌──────────┐     ┌──────────┐
//!                              │  Query   │────▶│  Table   │
//!                              │ sort/filt│     │ / JSON   │
//!                              └──────────┘     └──────────┘
//! ```
//!
//! ## Commands
//!
//! ```text
//! show                     every TODO, file order
//! important                TODOs containing '!'
//! user <name>              TODOs by one user
//! sort <importance|user|date>
//! date <yyyy[-mm[-dd]]>    TODOs dated after the given day
//! exit
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Scan settings |
//! | [`models`] | Core data types |
//! | [`connector_fs`] | Filesystem collector |
//! | [`extract`] | `// TODO` line extraction |
//! | [`fields`] | User / date / comment parsing |
//! | [`query`] | Record set, filters and sorts |
//! | [`table`] | Text table rendering |
//! | [`command`] | Operator command grammar |
//! | [`session`] | Command loop |
//! | [`ingest`] | Startup pipeline |

pub mod command;
pub mod config;
pub mod connector_fs;
pub mod error;
pub mod extract;
pub mod fields;
pub mod ingest;
pub mod models;
pub mod query;
pub mod session;
pub mod table;
