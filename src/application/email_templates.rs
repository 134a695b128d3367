pub const WAITLIST_CONFIRMATION_SUBJECT: &str = "Welcome to WorkSphere Life Beta Waitlist!";

const WAITLIST_CONFIRMATION_HTML: &str = r#"<div style="font-family: Arial, sans-serif; text-align: center;">
  <h2>Welcome to WorkSphere Life! 🎉</h2>
  <p>Thank you for signing up for our beta waitlist! You are now among the first to experience our platform.</p>
  <p>We’ll keep you updated with the latest news and exclusive early access.</p>
  <p>Stay tuned!</p>
  <br>
  <p>Best,</p>
  <p><strong>The WorkSphere Life Team</strong></p>
</div>"#;

/// Subject and HTML body of the waitlist confirmation. Every recipient gets
/// the same message.
pub fn waitlist_confirmation_email() -> (&'static str, &'static str) {
    (WAITLIST_CONFIRMATION_SUBJECT, WAITLIST_CONFIRMATION_HTML)
}
