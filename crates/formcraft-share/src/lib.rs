//! Sharing for formcraft forms: self-contained tokens, public links, and
//! submission storage.
//!
//! A shared form is encoded entirely into its URL token; decoding the token
//! reconstructs the form with no backing service. Submissions collected on
//! the public page are persisted through the [`SubmissionStore`] seam, keyed
//! by token.
//!
//! # Examples
//!
//! ```
//! use formcraft_core::{FieldType, FormModel};
//! use formcraft_share::{SharePayload, decode, encode, share_url};
//!
//! let mut form = FormModel::new();
//! form.add_field(FieldType::Email);
//!
//! let token = encode(&SharePayload::new(form.fields().to_vec()))?;
//! let url = share_url("https://forms.example.com", &token);
//! assert!(url.contains("/p/"));
//! assert_eq!(decode(&token)?.fields.len(), 1);
//! # Ok::<(), formcraft_share::TokenError>(())
//! ```

pub mod link;
pub mod submission;
pub mod token;

pub use link::share_url;
pub use submission::{
	MemoryStore, Submission, SubmissionStore, latest, load_submissions, record_submission,
	submission_key,
};
pub use token::{SharePayload, TokenError, decode, decode_or_none, encode};
