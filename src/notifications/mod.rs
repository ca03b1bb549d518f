//! Push-notification catalog documentation.
//!
//! The catalog is compiled in: it documents every notification the backend
//! can send, including ones whose triggers are not deployed yet, so product
//! and QA can review the whole surface in a single workbook. The
//! `notifications` command renders it through the same sink layer as the
//! translation workbook.
//!
//! ## Module Structure
//!
//! - `catalog`: the notification specifications themselves

pub mod catalog;

use std::fmt;

use crate::book::{Book, Sheet};

/// Implementation status of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Trigger deployed and sending.
    Active,
    /// Sender written but the trigger is not wired up.
    Pending,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Active => write!(f, "ACTIVE"),
            Status::Pending => write!(f, "PENDING"),
        }
    }
}

/// Functional area a notification belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Race,
    Social,
    Chat,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Race => write!(f, "RACE"),
            Channel::Social => write!(f, "SOCIAL"),
            Channel::Chat => write!(f, "CHAT"),
        }
    }
}

/// One documented notification type.
#[derive(Debug, Clone, Copy)]
pub struct NotificationSpec {
    pub status: Status,
    pub channel: Channel,
    pub kind: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub trigger: &'static str,
    pub trigger_path: &'static str,
    pub recipients: &'static str,
    pub data_fields: &'static str,
    pub notes: &'static str,
}

const DATA_HEADERS: [&str; 11] = [
    "No.",
    "Status",
    "Category",
    "Notification Type",
    "Title",
    "Body/Message",
    "Trigger Event",
    "Trigger Path",
    "Recipients",
    "Additional Data Fields",
    "Notes",
];

const DATA_WIDTHS: [f64; 11] = [
    5.0, 10.0, 12.0, 25.0, 25.0, 50.0, 45.0, 40.0, 30.0, 35.0, 45.0,
];
const SUMMARY_WIDTHS: [f64; 2] = [35.0, 70.0];

/// Assemble the notification-documentation workbook.
pub fn build_book(generated_on: &str, project_name: &str) -> Book {
    let specs = catalog::all();

    Book::new(vec![
        summary_sheet(&specs, generated_on, project_name),
        data_sheet(&specs),
    ])
}

fn data_sheet(specs: &[NotificationSpec]) -> Sheet {
    let mut sheet = Sheet::data("All Notifications", &DATA_HEADERS, &DATA_WIDTHS);

    for (index, spec) in specs.iter().enumerate() {
        sheet.push_row(vec![
            (index + 1).to_string(),
            spec.status.to_string(),
            spec.channel.to_string(),
            spec.kind.to_string(),
            spec.title.to_string(),
            spec.body.to_string(),
            spec.trigger.to_string(),
            spec.trigger_path.to_string(),
            spec.recipients.to_string(),
            spec.data_fields.to_string(),
            spec.notes.to_string(),
        ]);
    }

    sheet
}

fn count(specs: &[NotificationSpec], pred: impl Fn(&NotificationSpec) -> bool) -> usize {
    specs.iter().filter(|s| pred(s)).count()
}

fn summary_sheet(specs: &[NotificationSpec], generated_on: &str, project_name: &str) -> Sheet {
    let active = count(specs, |s| s.status == Status::Active);
    let pending = count(specs, |s| s.status == Status::Pending);
    let race = count(specs, |s| s.channel == Channel::Race);
    let social = count(specs, |s| s.channel == Channel::Social);
    let chat = count(specs, |s| s.channel == Channel::Chat);

    let mut sheet = Sheet::summary("Summary & Statistics", &SUMMARY_WIDTHS);

    sheet.push_pair("Notification System Documentation", "");
    sheet.push_pair("Generated On:", generated_on);
    sheet.push_pair("Project:", project_name);
    sheet.push_blank();
    sheet.push_pair("Overall Statistics:", "");
    sheet.push_pair("Total Notifications:", specs.len().to_string());
    sheet.push_pair("Active (Implemented):", active.to_string());
    sheet.push_pair("Pending (Not Triggered):", pending.to_string());
    sheet.push_blank();
    sheet.push_pair("Breakdown by Category:", "");
    sheet.push_pair("Race Notifications:", race.to_string());
    sheet.push_pair("Social Notifications:", social.to_string());
    sheet.push_pair("Chat Notifications:", chat.to_string());
    sheet.push_blank();
    sheet.push_pair("Active Triggers (Deployed):", "");
    sheet.push_pair("race_invites (onCreate)", "Race invitations & join requests");
    sheet.push_pair(
        "races (onUpdate - statusId)",
        "Race status changes (started, completed, cancelled, ending)",
    );
    sheet.push_pair("races (onCreate)", "Race creation & public race broadcasts");
    sheet.push_pair(
        "race_invites (onUpdate)",
        "Invite/join request acceptance and decline",
    );
    sheet.push_pair(
        "races/{id}/participants (onCreate)",
        "Participant joined notifications",
    );
    sheet.push_pair(
        "races/{id}/participants (onUpdate)",
        "Overtaking, leader change, milestones (25%, 50%, 75%)",
    );
    sheet.push_pair("friend_requests (onCreate)", "Friend requests");
    sheet.push_pair(
        "friend_requests (onUpdate)",
        "Friend request responses (accepted/declined)",
    );
    sheet.push_pair("friends (onDelete)", "Friend removal");
    sheet.push_pair("chat_messages (onCreate)", "Direct 1-on-1 chat messages");
    sheet.push_pair("race_chat_messages (onCreate)", "Race group chat messages");
    sheet.push_blank();
    sheet.push_pair("Scheduled Functions:", "");
    sheet.push_pair(
        "autoStartScheduledRaces",
        "Runs every minute - auto-starts races at their scheduled time",
    );
    sheet.push_pair(
        "checkRaceCountdowns",
        "Runs every minute - sends 5-minute countdown alerts for ending races",
    );
    sheet.push_blank();
    sheet.push_pair("Pending Implementations:", "");
    sheet.push_pair(
        "Proximity Alerts",
        "Sender ready - needs trigger for <20m opponent distance",
    );
    sheet.push_pair(
        "Race Reminders",
        "Senders ready - need scheduled checks (15min, 1hr, 1day before start)",
    );

    sheet
}
