//! Share link construction

/// Build the public URL for a share token.
///
/// # Examples
///
/// ```
/// use formcraft_share::share_url;
///
/// assert_eq!(
/// 	share_url("https://forms.example.com", "abc123"),
/// 	"https://forms.example.com/p/abc123"
/// );
/// ```
pub fn share_url(origin: &str, token: &str) -> String {
	format!("{}/p/{token}", origin.trim_end_matches('/'))
}
