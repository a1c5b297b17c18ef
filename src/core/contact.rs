//! Contact form stub
//!
//! Submissions never leave the page. Each one produces a single transient
//! acknowledgment, identical whatever the visitor typed.

/// Text of the success notification shown after every submission
pub const CONTACT_ACKNOWLEDGMENT: &str = "Thank you for your message! We'll get back to you soon.";

/// How long the acknowledgment stays on screen
pub const NOTIFICATION_DURATION_MS: u32 = 5000;

/// Values typed into the contact form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.email.trim().is_empty() && self.message.trim().is_empty()
    }
}

/// A success banner waiting to be removed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub text: &'static str,
}

/// Notifications currently displayed for the contact form
#[derive(Clone, Debug, Default)]
pub struct ContactInbox {
    next_id: u64,
    pending: Vec<Notification>,
}

impl ContactInbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a submission and append its acknowledgment
    ///
    /// The form contents are deliberately unused; the returned id is what the
    /// caller passes to [`ContactInbox::expire`] after
    /// [`NOTIFICATION_DURATION_MS`].
    pub fn submit(&mut self, _form: &ContactForm) -> Notification {
        let notification = Notification {
            id: self.next_id,
            text: CONTACT_ACKNOWLEDGMENT,
        };
        self.next_id += 1;
        self.pending.push(notification.clone());
        notification
    }

    /// Remove a notification, returning whether it was still displayed
    pub fn expire(&mut self, id: u64) -> bool {
        let before = self.pending.len();
        self.pending.retain(|n| n.id != id);
        self.pending.len() != before
    }

    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Do you offer studio plans?".to_string(),
        }
    }

    #[test]
    fn test_submit_appends_one_notification() {
        let mut inbox = ContactInbox::new();
        let notification = inbox.submit(&filled_form());

        assert_eq!(inbox.pending().len(), 1);
        assert_eq!(inbox.pending()[0], notification);
    }

    #[test]
    fn test_acknowledgment_ignores_input() {
        let mut inbox = ContactInbox::new();
        let a = inbox.submit(&filled_form());
        let b = inbox.submit(&ContactForm::default());

        assert_eq!(a.text, CONTACT_ACKNOWLEDGMENT);
        assert_eq!(b.text, CONTACT_ACKNOWLEDGMENT);
    }

    #[test]
    fn test_expire_removes_notification() {
        let mut inbox = ContactInbox::new();
        let notification = inbox.submit(&filled_form());

        assert!(inbox.expire(notification.id));
        assert!(inbox.pending().is_empty());
        assert!(!inbox.expire(notification.id));
    }

    #[test]
    fn test_each_submission_gets_its_own_id() {
        let mut inbox = ContactInbox::new();
        let first = inbox.submit(&filled_form());
        let second = inbox.submit(&filled_form());
        assert_ne!(first.id, second.id);

        inbox.expire(first.id);
        assert_eq!(inbox.pending(), &[second]);
    }

    #[test]
    fn test_blank_form() {
        assert!(ContactForm::default().is_blank());
        assert!(!filled_form().is_blank());
    }
}
