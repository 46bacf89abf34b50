use crate::{
    note::{is_blank, ContestNote, NoteChange},
    reminder::{DeliveryTarget, ReminderMethod, ReminderPreference},
    shared::entity::{Entity, ID},
};

/// A registered `User` of BattleBoard.
///
/// The `User` is the aggregate owning everything a person keeps about
/// contests: bookmarks, `ReminderPreference`s and `ContestNote`s.
#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub username: String,
    /// Always stored lowercase
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub bookmarked_contests: Vec<i64>,
    pub reminder_preferences: Vec<ReminderPreference>,
    pub notes: Vec<ContestNote>,
    pub created: i64,
    pub updated: i64,
}

impl User {
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        phone_number: Option<String>,
        now: i64,
    ) -> Self {
        Self {
            id: Default::default(),
            username: username.trim().to_string(),
            email: email.to_lowercase(),
            password_hash,
            phone_number,
            bookmarked_contests: Vec::new(),
            reminder_preferences: Vec::new(),
            notes: Vec::new(),
            created: now,
            updated: now,
        }
    }

    pub fn has_reminders(&self) -> bool {
        !self.reminder_preferences.is_empty()
    }

    /// Stores the `ReminderPreference`, replacing the existing one for the same contest
    /// in place. Returns true if an existing preference was replaced.
    pub fn set_reminder(&mut self, reminder: ReminderPreference) -> bool {
        match self
            .reminder_preferences
            .iter_mut()
            .find(|r| r.contest_id == reminder.contest_id)
        {
            Some(existing) => {
                *existing = reminder;
                true
            }
            None => {
                self.reminder_preferences.push(reminder);
                false
            }
        }
    }

    /// Returns true if there was a reminder for the contest
    pub fn remove_reminder(&mut self, contest_id: i64) -> bool {
        let len_before = self.reminder_preferences.len();
        self.reminder_preferences
            .retain(|r| r.contest_id != contest_id);
        len_before != self.reminder_preferences.len()
    }

    /// Where reminders with the given method should be delivered, if the `User`
    /// has registered the needed contact information
    pub fn delivery_target(&self, method: ReminderMethod) -> Option<DeliveryTarget> {
        match method {
            ReminderMethod::Email if !self.email.is_empty() => {
                Some(DeliveryTarget::Email(self.email.clone()))
            }
            ReminderMethod::Email => None,
            ReminderMethod::Sms => self
                .phone_number
                .as_deref()
                .and_then(DeliveryTarget::sms),
        }
    }

    /// Returns false if the contest was already bookmarked
    pub fn bookmark(&mut self, contest_id: i64) -> bool {
        if self.bookmarked_contests.contains(&contest_id) {
            return false;
        }
        self.bookmarked_contests.push(contest_id);
        true
    }

    pub fn remove_bookmark(&mut self, contest_id: i64) -> bool {
        let len_before = self.bookmarked_contests.len();
        self.bookmarked_contests.retain(|id| *id != contest_id);
        len_before != self.bookmarked_contests.len()
    }

    /// The note for the contest, if there is one that is not blank
    pub fn find_note(&self, contest_id: i64) -> Option<&ContestNote> {
        self.notes
            .iter()
            .find(|n| n.contest_id == contest_id && !n.is_blank())
    }

    /// Writes the note for the contest. A blank note removes the existing note.
    pub fn set_note(&mut self, contest_id: i64, note: String, now: i64) -> NoteChange {
        let existing = self.notes.iter().position(|n| n.contest_id == contest_id);

        if is_blank(&note) {
            return match existing {
                Some(index) => {
                    self.notes.remove(index);
                    NoteChange::Removed
                }
                None => NoteChange::Rejected,
            };
        }

        match existing {
            Some(index) => {
                self.notes[index].note = note;
                self.notes[index].created = now;
                NoteChange::Updated
            }
            None => {
                self.notes.push(ContestNote {
                    contest_id,
                    note,
                    created: now,
                });
                NoteChange::Created
            }
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Platform;

    fn user() -> User {
        User::new(
            " champ ".into(),
            "Champ@Example.com".into(),
            "hash".into(),
            None,
            0,
        )
    }

    #[test]
    fn it_normalizes_username_and_email() {
        let user = user();
        assert_eq!(user.username, "champ");
        assert_eq!(user.email, "champ@example.com");
    }

    #[test]
    fn it_overwrites_reminder_for_same_contest() {
        let mut user = user();
        assert!(!user.has_reminders());

        assert!(!user.set_reminder(ReminderPreference::new(10, Platform::Codeforces, 1000)));
        assert!(!user.set_reminder(ReminderPreference::new(11, Platform::Leetcode, 2000)));

        let mut updated = ReminderPreference::new(10, Platform::Codeforces, 5000);
        updated.method = ReminderMethod::Sms;
        updated.minutes_before = 15;
        assert!(user.set_reminder(updated.clone()));

        assert_eq!(user.reminder_preferences.len(), 2);
        // Replaced in place
        assert_eq!(user.reminder_preferences[0], updated);
        assert_eq!(user.reminder_preferences[1].contest_id, 11);
    }

    #[test]
    fn it_removes_reminders() {
        let mut user = user();
        user.set_reminder(ReminderPreference::new(10, Platform::Codeforces, 1000));
        assert!(!user.remove_reminder(11));
        assert!(user.remove_reminder(10));
        assert!(!user.has_reminders());
    }

    #[test]
    fn it_finds_delivery_targets() {
        let mut user = user();
        assert_eq!(
            user.delivery_target(ReminderMethod::Email),
            Some(DeliveryTarget::Email("champ@example.com".into()))
        );
        assert_eq!(user.delivery_target(ReminderMethod::Sms), None);

        user.phone_number = Some("98765 43210".into());
        assert_eq!(
            user.delivery_target(ReminderMethod::Sms),
            Some(DeliveryTarget::Sms("+919876543210".into()))
        );

        user.email = String::new();
        assert_eq!(user.delivery_target(ReminderMethod::Email), None);
    }

    #[test]
    fn it_bookmarks_contests_once() {
        let mut user = user();
        assert!(user.bookmark(1));
        assert!(!user.bookmark(1));
        assert!(user.bookmark(2));
        assert_eq!(user.bookmarked_contests, vec![1, 2]);
        assert!(user.remove_bookmark(1));
        assert!(!user.remove_bookmark(1));
        assert_eq!(user.bookmarked_contests, vec![2]);
    }

    #[test]
    fn it_writes_notes() {
        let mut user = user();
        assert_eq!(user.set_note(1, "  ".into(), 10), NoteChange::Rejected);
        assert_eq!(user.set_note(1, "dp heavy".into(), 10), NoteChange::Created);
        assert_eq!(user.find_note(1).unwrap().note, "dp heavy");
        assert_eq!(user.set_note(1, "graphs".into(), 20), NoteChange::Updated);

        let note = user.find_note(1).unwrap();
        assert_eq!(note.note, "graphs");
        assert_eq!(note.created, 20);
        assert_eq!(user.notes.len(), 1);

        assert_eq!(user.set_note(1, "".into(), 30), NoteChange::Removed);
        assert!(user.find_note(1).is_none());
        assert!(user.notes.is_empty());
    }
}
