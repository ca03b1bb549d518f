//! The notification catalog.
//!
//! One entry per notification type the backend can send. Kept in sync with
//! the cloud function triggers by hand; the trigger path column points at the
//! implementation so reviewers can verify entries against the code.

use super::{Channel, NotificationSpec, Status};

/// Every documented notification, in display order: race lifecycle first,
/// then live-race alerts, pending race work, social, and chat.
pub fn all() -> Vec<NotificationSpec> {
    vec![
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Race Invitation",
            title: "Race Invitation 🏃‍♂️",
            body: "{inviterName} invited you to join \"{raceTitle}\"",
            trigger: "Document created in race_invites collection with type='received' and isJoinRequest=false",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onRaceInviteCreated)",
            recipients: "Invited user (toUserId)",
            data_fields: "type: InviteRace, raceId, raceName, inviterUserId, inviterName, startTime?, distance?, location?",
            notes: "Only processes 'received' type invites to avoid duplicates.",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "New Join Request",
            title: "New Join Request 🙋‍♂️",
            body: "{requesterName} wants to join \"{raceTitle}\"",
            trigger: "Document created in race_invites collection with type='received' and isJoinRequest=true",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onRaceInviteCreated)",
            recipients: "Race organizer (toUserId)",
            data_fields: "type: NewJoinRequest, raceId, raceName, requesterUserId, requesterName, requestedAt",
            notes: "Sent when a user requests to join; the organizer receives it.",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Race Created (Confirmation)",
            title: "Race Created Successfully! 🎉",
            body: "Your {raceType} \"{raceTitle}\" is ready! Distance: {distance}km.",
            trigger: "New document created in races collection",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onRaceCreated)",
            recipients: "Race creator (createdBy)",
            data_fields: "type: RaceCreated, raceId, raceName, raceType, distance",
            notes: "Confirmation back to the creator.",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Public Race Announcement",
            title: "New Public Race Available! 🏁",
            body: "{organizerName} created \"{raceTitle}\" - {distance}km. Join now!",
            trigger: "New document created in races collection with raceTypeId=3 (Public)",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onRaceCreated)",
            recipients: "ALL app users (except creator)",
            data_fields: "type: PublicRaceAnnouncement, raceId, raceName, organizerName, distance",
            notes: "Broadcast to every user, batched by 500 FCM tokens.",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Race Started",
            title: "Race Started! 🚀",
            body: "\"{raceTitle}\" has begun! Good luck!",
            trigger: "Race document updated with statusId changed to 3 (ACTIVE)",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onRaceStatusChanged)",
            recipients: "All race participants",
            data_fields: "type: RaceBegin, raceId, raceName, participantCount?, startedAt",
            notes: "Auto-triggered by autoStartScheduledRaces or a manual start.",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Participant Joined",
            title: "Someone Joined Your Race! 🎉",
            body: "{participantName} joined \"{raceTitle}\"",
            trigger: "Document created in races/{raceId}/participants/{userId} subcollection",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onParticipantJoined)",
            recipients: "Race organizer (skipped when the participant is the organizer)",
            data_fields: "type: ParticipantJoined, raceId, raceName, participantUserId, participantName",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Join Request Accepted",
            title: "Join Request Accepted ✅",
            body: "{organizerName} accepted your request to join \"{raceTitle}\"",
            trigger: "race_invites document updated with status='accepted' and isJoinRequest=true",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onRaceInviteAccepted)",
            recipients: "User who requested to join (toUserId)",
            data_fields: "type: JoinRequestAccepted, raceId, raceName, organizerUserId, organizerName, acceptedAt",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Join Request Declined",
            title: "Join Request Declined",
            body: "{organizerName} declined your request to join \"{raceTitle}\"",
            trigger: "race_invites document updated with status='declined' and isJoinRequest=true",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onRaceInviteDeclined)",
            recipients: "User who requested to join (toUserId)",
            data_fields: "type: JoinRequestDeclined, raceId, raceName, organizerName, declinedAt",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Invite Accepted",
            title: "Race Invite Accepted 🎉",
            body: "{accepterName} accepted your invite to \"{raceTitle}\"",
            trigger: "race_invites document updated with status='accepted' and isJoinRequest=false",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onRaceInviteAccepted)",
            recipients: "Race organizer who sent the invite (fromUserId)",
            data_fields: "type: InviteAccepted, raceId, raceName, accepterUserId, accepterName, acceptedAt",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Invite Declined",
            title: "Race Invite Declined",
            body: "{declinerName} declined your invite to \"{raceTitle}\"",
            trigger: "race_invites document updated with status='declined' and isJoinRequest=false",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onRaceInviteDeclined)",
            recipients: "Race organizer who sent the invite (fromUserId)",
            data_fields: "type: InviteDeclined, raceId, raceName, declinerName, declinedAt",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "First Finisher",
            title: "🏁 First to Finish!",
            body: "Amazing! You're the first to complete \"{raceTitle}\"!",
            trigger: "Race document updated with statusId changed to 6 (ENDING) - first participant crosses finish",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onRaceStatusChanged)",
            recipients: "First finisher (firstFinisherUserId)",
            data_fields: "type: RaceFirstFinisher, raceId, raceName, finishedAt",
            notes: "Starts the deadline countdown for everyone else.",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Deadline Alert",
            title: "⏰ Deadline Approaching!",
            body: "{firstFinisherName} finished first! You have {deadlineMinutes} minutes to complete the race!",
            trigger: "Race document updated with statusId changed to 6 (ENDING) - deadline countdown starts",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onRaceStatusChanged)",
            recipients: "All active participants who haven't finished yet",
            data_fields: "type: RaceDeadlineAlert, raceId, raceName, firstFinisherName, deadlineMinutes, deadline",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Countdown Timer (5 minutes)",
            title: "⏰ 5 Minutes Left!",
            body: "Time is running out in \"{raceTitle}\"! Sprint to the finish!",
            trigger: "Scheduled function checks races in ENDING status with deadline 4-5 minutes away",
            trigger_path: "functions/scheduled/raceCountdownChecker.js (checkRaceCountdowns)",
            recipients: "All active participants who haven't finished",
            data_fields: "type: RaceCountdownTimer, raceId, raceName, minutesLeft: 5",
            notes: "Duplicate sends prevented with the countdownNotificationSent flag.",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Race Completed (Winner - 1st)",
            title: "Congratulations! 🥇",
            body: "You won \"{raceTitle}\"! Amazing performance!",
            trigger: "Race document updated with statusId changed to 4 (COMPLETED)",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onRaceStatusChanged)",
            recipients: "Participant who finished 1st",
            data_fields: "type: RaceWon, raceId, raceName, rank: 1, xpEarned?, distanceCovered?, avgSpeed?, completedAt",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Race Completed (2nd Place)",
            title: "Great Job! 🥈",
            body: "You finished 2nd in \"{raceTitle}\"! Well done!",
            trigger: "Race document updated with statusId changed to 4 (COMPLETED)",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onRaceStatusChanged)",
            recipients: "Participant who finished 2nd",
            data_fields: "type: RaceCompleted, raceId, raceName, rank: 2, xpEarned?, distanceCovered?, avgSpeed?, completedAt",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Race Completed (3rd Place)",
            title: "Excellent! 🥉",
            body: "You finished 3rd in \"{raceTitle}\"! Great effort!",
            trigger: "Race document updated with statusId changed to 4 (COMPLETED)",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onRaceStatusChanged)",
            recipients: "Participant who finished 3rd",
            data_fields: "type: RaceCompleted, raceId, raceName, rank: 3, xpEarned?, distanceCovered?, avgSpeed?, completedAt",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Race Completed (Other)",
            title: "Race Completed! 🏃‍♂️",
            body: "You finished \"{raceTitle}\" in {rank} place!",
            trigger: "Race document updated with statusId changed to 4 (COMPLETED)",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onRaceStatusChanged)",
            recipients: "Participants who finished 4th or lower",
            data_fields: "type: RaceCompleted, raceId, raceName, rank, xpEarned?, distanceCovered?, avgSpeed?, completedAt",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Race Cancelled",
            title: "❌ Race Cancelled",
            body: "The race \"{raceTitle}\" has been cancelled. Reason: {reason}",
            trigger: "Race document updated with statusId changed to 7 (CANCELLED)",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onRaceStatusChanged)",
            recipients: "All race participants",
            data_fields: "type: RaceCancelled, raceId, raceName, cancellationReason, cancelledAt",
            notes: "Includes the cancellation reason when the organizer provides one.",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Overtaking (Overtaker)",
            title: "Great Overtake! 🚀",
            body: "Awesome! You overtook {overtakenName} and moved to rank #{newRank}!",
            trigger: "Participant document updated with an improved rank",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onParticipantProgress)",
            recipients: "Participant who overtook",
            data_fields: "type: RaceOvertake, raceId, raceName, overtakenName, newRank",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Overtaking (Overtaken)",
            title: "You Were Overtaken! ⚡",
            body: "{overtakerName} just overtook you! Speed up to reclaim your position!",
            trigger: "Participant document updated (another participant overtakes)",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onParticipantProgress)",
            recipients: "Participant who was overtaken",
            data_fields: "type: RaceOvertaken, raceId, raceName, overtakerName, newRank",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Leader Change",
            title: "New Leader! 👑",
            body: "{newLeaderName} took the lead in \"{raceTitle}\"!",
            trigger: "Participant document updated with rank changed to 1",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onParticipantProgress)",
            recipients: "All race participants (except the new leader, excludes winners)",
            data_fields: "type: RaceLeaderChange, raceId, raceName, newLeaderName",
            notes: "Completed winners don't receive ongoing race alerts.",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Personal Milestone",
            title: "Milestone Reached! 🎯",
            body: "Great job! You've completed {milestone}% of \"{raceTitle}\"!",
            trigger: "Participant document updated with distance crossing a 25/50/75% threshold",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onParticipantProgress)",
            recipients: "Participant who reached the milestone",
            data_fields: "type: RaceMilestone, raceId, raceName, milestone: 25|50|75",
            notes: "Thresholds already reached are tracked in the reachedMilestones array.",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Race,
            kind: "Milestone Alert",
            title: "{userName} Hit {milestone}%! 🎯",
            body: "{userName} reached {milestone}% of \"{raceTitle}\". Keep pushing!",
            trigger: "Participant document updated (someone else crossed a milestone)",
            trigger_path: "functions/notifications/triggers/raceTriggers.js (onParticipantProgress)",
            recipients: "All other race participants (except achiever, excludes winners)",
            data_fields: "type: RaceMilestoneAlert, raceId, raceName, achieverName, achieverUserId, milestone",
            notes: "",
        },
        NotificationSpec {
            status: Status::Pending,
            channel: Channel::Race,
            kind: "Proximity Alert",
            title: "🔥 Opponent Approaching!",
            body: "{chaserName} is only {distanceGap}m behind you! Speed up!",
            trigger: "NOT IMPLEMENTED - would trigger when an opponent gets within 20m",
            trigger_path: "functions/notifications/senders/raceNotifications.js (sendProximityAlert)",
            recipients: "Participant being chased",
            data_fields: "type: RaceProximityAlert, raceId, chaserName, distanceGap",
            notes: "Sender is ready; no trigger wired up yet.",
        },
        NotificationSpec {
            status: Status::Pending,
            channel: Channel::Race,
            kind: "Race Reminder (15 min)",
            title: "Race Starting Soon! ⏰",
            body: "\"{raceTitle}\" starts in 15 minutes. Get ready!",
            trigger: "NOT IMPLEMENTED - needs a scheduled check 15 minutes before start",
            trigger_path: "functions/notifications/senders/raceNotifications.js (sendRaceReminder)",
            recipients: "All race participants",
            data_fields: "type: RaceReminder, raceId, raceName, minutesToStart: 15",
            notes: "",
        },
        NotificationSpec {
            status: Status::Pending,
            channel: Channel::Race,
            kind: "Race Reminder (1 hour)",
            title: "Race Reminder 🕐",
            body: "\"{raceTitle}\" starts in 1 hour. Don't forget!",
            trigger: "NOT IMPLEMENTED - needs a scheduled check 1 hour before start",
            trigger_path: "functions/notifications/senders/raceNotifications.js (sendRaceReminder)",
            recipients: "All race participants",
            data_fields: "type: RaceReminder, raceId, raceName, minutesToStart: 60",
            notes: "",
        },
        NotificationSpec {
            status: Status::Pending,
            channel: Channel::Race,
            kind: "Race Reminder (1 day)",
            title: "Race Tomorrow 📅",
            body: "\"{raceTitle}\" is scheduled for tomorrow.",
            trigger: "NOT IMPLEMENTED - needs a scheduled check 1 day before start",
            trigger_path: "functions/notifications/senders/raceNotifications.js (sendRaceReminder)",
            recipients: "All race participants",
            data_fields: "type: RaceReminder, raceId, raceName, minutesToStart: 1440",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Social,
            kind: "Friend Request",
            title: "New Friend Request 👥",
            body: "{senderName} wants to be your friend!",
            trigger: "Document created in friend_requests collection",
            trigger_path: "functions/notifications/triggers/friendTriggers.js (onFriendRequestCreated)",
            recipients: "Receiver of the friend request",
            data_fields: "type: FriendRequest, senderUserId, senderName",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Social,
            kind: "Friend Request Accepted",
            title: "Friend Request Accepted! 🎉",
            body: "{friendName} accepted your friend request!",
            trigger: "friend_requests document updated with status='accepted'",
            trigger_path: "functions/notifications/triggers/friendTriggers.js (onFriendRequestResponded)",
            recipients: "Original friend request sender",
            data_fields: "type: FriendRequestAccepted, friendUserId, friendName",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Social,
            kind: "Friend Request Declined",
            title: "Friend Request Declined 😔",
            body: "{friendName} declined your friend request.",
            trigger: "friend_requests document updated with status='declined'",
            trigger_path: "functions/notifications/triggers/friendTriggers.js (onFriendRequestResponded)",
            recipients: "Original friend request sender",
            data_fields: "type: FriendRequestDeclined, friendUserId, friendName",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Social,
            kind: "Friend Removed",
            title: "Friendship Ended 💔",
            body: "{removerName} removed you from their friends list.",
            trigger: "Document deleted from friends collection",
            trigger_path: "functions/notifications/triggers/friendTriggers.js (onFriendRemoved)",
            recipients: "Friend who was removed",
            data_fields: "type: FriendRemoved, removerUserId, removerName",
            notes: "",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Chat,
            kind: "Direct Chat Message",
            title: "New Message from {senderName} 💬",
            body: "{messageText}",
            trigger: "Document created in chat_messages collection",
            trigger_path: "functions/notifications/triggers/chatTriggers.js (onChatMessageCreated)",
            recipients: "Message receiver (receiverId)",
            data_fields: "type: ChatMessage, senderUserId, senderName, chatId",
            notes: "Message text truncated to 100 characters.",
        },
        NotificationSpec {
            status: Status::Active,
            channel: Channel::Chat,
            kind: "Race Chat Message",
            title: "{raceTitle} 🏃",
            body: "{senderName}: {messageText}",
            trigger: "Document created in race_chat_messages collection",
            trigger_path: "functions/notifications/triggers/chatTriggers.js (onRaceChatMessageCreated)",
            recipients: "All race chat participants (except sender)",
            data_fields: "type: RaceChatMessage, raceId, raceName, senderUserId, senderName",
            notes: "Message text truncated to 80 characters; sent in parallel to all participants.",
        },
    ]
}
