//! Submission records and the key-value persistence seam
//!
//! Submissions for a shared form live under a single key derived from the
//! share token. The storage backend is abstracted behind [`SubmissionStore`]
//! so hosts can plug in browser local storage, a file, or anything else that
//! stores strings; [`MemoryStore`] covers tests and ephemeral sessions.

use chrono::{DateTime, Utc};
use formcraft_core::FormValue;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// One submitted response to a shared form.
///
/// `values` is keyed by field id. `last_edited` is only set once a submission
/// has been edited and resubmitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
	pub id: String,
	pub submitted_at: DateTime<Utc>,
	pub values: BTreeMap<String, FormValue>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub form_title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_edited: Option<DateTime<Utc>>,
}

impl Submission {
	/// Create a new submission stamped with the current time.
	pub fn new(values: BTreeMap<String, FormValue>) -> Self {
		Self {
			id: format!("submission-{}", Uuid::new_v4().simple()),
			submitted_at: Utc::now(),
			values,
			form_title: None,
			last_edited: None,
		}
	}

	pub fn with_form_title(mut self, title: impl Into<String>) -> Self {
		self.form_title = Some(title.into());
		self
	}
}

/// String key-value storage for submission lists.
///
/// Mirrors the localStorage shape a browser host provides: opaque string
/// keys, string values, last write wins.
pub trait SubmissionStore {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&mut self, key: &str, value: String);
}

/// In-memory [`SubmissionStore`] for tests and short-lived sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	entries: HashMap<String, String>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl SubmissionStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: String) {
		self.entries.insert(key.to_string(), value);
	}
}

/// The storage key holding all submissions for one shared form.
pub fn submission_key(token: &str) -> String {
	format!("public-form:{token}:submissions")
}

/// Load the submission list for a token, oldest first.
///
/// A missing key is an empty list. So is a corrupt one: storage written by
/// something else should never take the form page down.
pub fn load_submissions<S: SubmissionStore>(store: &S, token: &str) -> Vec<Submission> {
	let Some(raw) = store.get(&submission_key(token)) else {
		return Vec::new();
	};
	match serde_json::from_str(&raw) {
		Ok(submissions) => submissions,
		Err(error) => {
			tracing::warn!(%error, token, "discarding corrupt submission list");
			Vec::new()
		}
	}
}

/// Append a submission, or replace it in place when its id already exists.
///
/// In-place replacement marks the record edited by refreshing `lastEdited`;
/// `submittedAt` keeps the original timestamp. Returns an error only when the
/// list cannot be re-serialized.
pub fn record_submission<S: SubmissionStore>(
	store: &mut S,
	token: &str,
	submission: Submission,
) -> serde_json::Result<()> {
	let mut submissions = load_submissions(store, token);
	match submissions.iter_mut().find(|existing| existing.id == submission.id) {
		Some(existing) => {
			let submitted_at = existing.submitted_at;
			*existing = submission;
			existing.submitted_at = submitted_at;
			existing.last_edited = Some(Utc::now());
		}
		None => submissions.push(submission),
	}
	store.set(&submission_key(token), serde_json::to_string(&submissions)?);
	Ok(())
}

/// The most recent `n` submissions, newest first.
pub fn latest(submissions: &[Submission], n: usize) -> Vec<&Submission> {
	submissions.iter().rev().take(n).collect()
}
