mod helpers;

use battleboard_sdk::{
    BattleBoardSDK, ContactFormInput, LoginUserInput, Platform, RegisterUserInput,
    ReminderMethod, SetReminderInput, StatusCode, UpdateMeInput, UpdateNoteInput,
};
use helpers::setup::{register_and_login, spawn_app, verify_email};

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk) = spawn_app().await;
    let res = sdk.status.check_health().await.expect("Expected status");
    assert_eq!(res.message, "Yo! We are up!\r\n");
}

#[actix_web::main]
#[test]
async fn test_register_and_login() {
    let (app, sdk) = spawn_app().await;
    let email_verification_token = verify_email(&app, &sdk, "tourist@example.com").await;
    let res = sdk
        .user
        .register(RegisterUserInput {
            email_verification_token,
            username: "tourist".into(),
            email: "tourist@example.com".into(),
            password: "Str0ng!Passw0rd".into(),
            phone_number: Some("9876543210".into()),
        })
        .await
        .expect("Expected to register user");
    assert_eq!(res.user.username, "tourist");

    for email_or_username in ["tourist", "tourist@example.com"] {
        let login = sdk
            .user
            .login(LoginUserInput {
                email_or_username: email_or_username.into(),
                password: "Str0ng!Passw0rd".into(),
            })
            .await
            .expect("Expected to login");
        assert_eq!(login.user.id, res.user.id);
        assert!(!login.token.is_empty());
    }

    let wrong_password = sdk
        .user
        .login(LoginUserInput {
            email_or_username: "tourist".into(),
            password: "Wr0ng!Passw0rd".into(),
        })
        .await;
    assert!(wrong_password.is_err());
}

#[actix_web::main]
#[test]
async fn test_register_rejects_duplicates_and_weak_passwords() {
    let (app, sdk) = spawn_app().await;
    register_and_login(&app, &sdk, "petr").await;

    let email_verification_token = verify_email(&app, &sdk, "other@example.com").await;
    let duplicate = sdk
        .user
        .register(RegisterUserInput {
            email_verification_token,
            username: "petr".into(),
            email: "other@example.com".into(),
            password: "Str0ng!Passw0rd".into(),
            phone_number: None,
        })
        .await;
    assert_eq!(duplicate.unwrap_err().status(), Some(StatusCode::CONFLICT));

    let email_verification_token = verify_email(&app, &sdk, "weakling@example.com").await;
    let weak = sdk
        .user
        .register(RegisterUserInput {
            email_verification_token,
            username: "weakling".into(),
            email: "weakling@example.com".into(),
            password: "password".into(),
            phone_number: None,
        })
        .await;
    assert_eq!(weak.unwrap_err().status(), Some(StatusCode::BAD_REQUEST));
}

#[actix_web::main]
#[test]
async fn test_register_requires_verified_email() {
    let (app, sdk) = spawn_app().await;
    let input = |email: &str, email_verification_token: String| RegisterUserInput {
        email_verification_token,
        username: "radewoosh".into(),
        email: email.into(),
        password: "Str0ng!Passw0rd".into(),
        phone_number: None,
    };

    let unverified = sdk
        .user
        .register(input("radewoosh@example.com", "not-a-token".into()))
        .await;
    assert_eq!(unverified.unwrap_err().status(), Some(StatusCode::UNAUTHORIZED));

    let email_verification_token = verify_email(&app, &sdk, "someone@example.com").await;
    let other_email = sdk
        .user
        .register(input("radewoosh@example.com", email_verification_token))
        .await;
    assert_eq!(other_email.unwrap_err().status(), Some(StatusCode::UNAUTHORIZED));

    let login = sdk
        .user
        .login(LoginUserInput {
            email_or_username: "radewoosh".into(),
            password: "Str0ng!Passw0rd".into(),
        })
        .await;
    assert!(login.is_err());
}

#[actix_web::main]
#[test]
async fn test_otp_is_single_use() {
    let (app, sdk) = spawn_app().await;
    assert_eq!(
        sdk.user
            .send_otp("not-an-email".into())
            .await
            .unwrap_err()
            .status(),
        Some(StatusCode::BAD_REQUEST)
    );

    sdk.user
        .send_otp("maroonrk@example.com".into())
        .await
        .expect("Expected to send OTP");
    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].1.subject, "Your OTP for Email Verification");

    let code = app.mailer.last_code_for("maroonrk@example.com").unwrap();
    assert!(sdk
        .user
        .verify_otp("maroonrk@example.com".into(), code.clone())
        .await
        .is_ok());
    assert_eq!(
        sdk.user
            .verify_otp("maroonrk@example.com".into(), code)
            .await
            .unwrap_err()
            .status(),
        Some(StatusCode::BAD_REQUEST)
    );
}

#[actix_web::main]
#[test]
async fn test_reset_password() {
    let (app, sdk) = spawn_app().await;
    register_and_login(&app, &sdk, "errichto").await;

    assert_eq!(
        sdk.user
            .reset_password("not-a-token", "N3w!Passw0rd".into())
            .await
            .unwrap_err()
            .status(),
        Some(StatusCode::UNAUTHORIZED)
    );

    let token = verify_email(&app, &sdk, "errichto@example.com").await;
    let res = sdk
        .user
        .reset_password(&token, "N3w!Passw0rd".into())
        .await
        .expect("Expected to reset password");
    assert_eq!(res.message, "Password reset successfully");

    let login = |password: &str| LoginUserInput {
        email_or_username: "errichto".into(),
        password: password.into(),
    };
    assert!(sdk.user.login(login("Str0ng!Passw0rd")).await.is_err());
    assert!(sdk.user.login(login("N3w!Passw0rd")).await.is_ok());

    let unknown = verify_email(&app, &sdk, "nobody@example.com").await;
    assert_eq!(
        sdk.user
            .reset_password(&unknown, "N3w!Passw0rd".into())
            .await
            .unwrap_err()
            .status(),
        Some(StatusCode::UNAUTHORIZED)
    );
}

#[actix_web::main]
#[test]
async fn test_contact_form() {
    let (app, sdk) = spawn_app().await;
    let res = sdk
        .user
        .contact(ContactFormInput {
            name: "Visitor".into(),
            email: "visitor@example.com".into(),
            message: "<script>alert(1)</script>".into(),
        })
        .await
        .expect("Expected to submit contact form");
    assert_eq!(res.message, "Message sent successfully");

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, app.config.email.contact_recipient);
    assert!(sent[0].1.html.contains("&lt;script&gt;"));

    let incomplete = sdk
        .user
        .contact(ContactFormInput {
            name: "Visitor".into(),
            email: "visitor@example.com".into(),
            message: " ".into(),
        })
        .await;
    assert_eq!(incomplete.unwrap_err().status(), Some(StatusCode::BAD_REQUEST));
}

#[actix_web::main]
#[test]
async fn test_protected_routes_require_token() {
    let (app, sdk) = spawn_app().await;
    assert_eq!(
        sdk.user.me().await.unwrap_err().status(),
        Some(StatusCode::UNAUTHORIZED)
    );
    assert_eq!(
        sdk.reminder.get_all().await.unwrap_err().status(),
        Some(StatusCode::UNAUTHORIZED)
    );

    let stranger = BattleBoardSDK::with_token(app.address.clone(), "not-a-token");
    assert_eq!(
        stranger.bookmark.get_all().await.unwrap_err().status(),
        Some(StatusCode::UNAUTHORIZED)
    );
}

#[actix_web::main]
#[test]
async fn test_update_me() {
    let (app, sdk) = spawn_app().await;
    let user_sdk = register_and_login(&app, &sdk, "benq").await;

    let res = user_sdk
        .user
        .update_me(UpdateMeInput {
            phone_number: Some("+14155550123".into()),
            ..Default::default()
        })
        .await
        .expect("Expected to update phone number");
    assert_eq!(res.user.phone_number, Some("+14155550123".into()));

    let invalid = user_sdk
        .user
        .update_me(UpdateMeInput {
            phone_number: Some("12".into()),
            ..Default::default()
        })
        .await;
    assert_eq!(invalid.unwrap_err().status(), Some(StatusCode::BAD_REQUEST));

    let me = user_sdk.user.me().await.expect("Expected to get me");
    assert_eq!(me.user.phone_number, Some("+14155550123".into()));
}

#[actix_web::main]
#[test]
async fn test_reminder_crud() {
    let (app, sdk) = spawn_app().await;
    let user_sdk = register_and_login(&app, &sdk, "jiangly").await;

    let res = user_sdk
        .reminder
        .set(SetReminderInput {
            contest_id: 1,
            platform: Platform::Codeforces,
            method: None,
            time_before: None,
            contest_time: 1741527000000,
        })
        .await
        .expect("Expected to set reminder");
    assert_eq!(res.reminders.len(), 1);
    assert_eq!(res.reminders[0].method, ReminderMethod::Email);
    assert_eq!(res.reminders[0].time_before, 60);

    // Setting it again replaces the existing one
    let res = user_sdk
        .reminder
        .set(SetReminderInput {
            contest_id: 1,
            platform: Platform::Codeforces,
            method: Some(ReminderMethod::Sms),
            time_before: Some(15),
            contest_time: 1741527000000,
        })
        .await
        .expect("Expected to replace reminder");
    assert_eq!(res.reminders.len(), 1);
    assert_eq!(res.reminders[0].method, ReminderMethod::Sms);
    assert_eq!(res.reminders[0].time_before, 15);

    let invalid = user_sdk
        .reminder
        .set(SetReminderInput {
            contest_id: 2,
            platform: Platform::Leetcode,
            method: None,
            time_before: Some(0),
            contest_time: 1741527000000,
        })
        .await;
    assert_eq!(invalid.unwrap_err().status(), Some(StatusCode::BAD_REQUEST));

    let res = user_sdk
        .reminder
        .delete(1)
        .await
        .expect("Expected to delete reminder");
    assert!(res.reminders.is_empty());

    // Deleting a missing reminder is fine
    assert!(user_sdk.reminder.delete(1).await.is_ok());
    assert!(user_sdk
        .reminder
        .get_all()
        .await
        .expect("Expected reminders")
        .reminders
        .is_empty());
}

#[actix_web::main]
#[test]
async fn test_bookmarks() {
    let (app, sdk) = spawn_app().await;
    let user_sdk = register_and_login(&app, &sdk, "ecnerwala").await;

    assert!(user_sdk
        .bookmark
        .get_all()
        .await
        .expect("Expected bookmarks")
        .contests
        .is_empty());

    user_sdk.bookmark.add(2).await.expect("Expected to bookmark");
    let res = user_sdk.bookmark.add(3).await.expect("Expected to bookmark");
    assert_eq!(res.bookmarked_contests, vec![2, 3]);

    let bookmarked = user_sdk
        .bookmark
        .get_all()
        .await
        .expect("Expected bookmarks")
        .contests;
    assert_eq!(
        bookmarked.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![2, 3]
    );

    let res = user_sdk
        .bookmark
        .remove(2)
        .await
        .expect("Expected to remove bookmark");
    assert_eq!(res.bookmarked_contests, vec![3]);
}

#[actix_web::main]
#[test]
async fn test_notes() {
    let (app, sdk) = spawn_app().await;
    let user_sdk = register_and_login(&app, &sdk, "um_nik").await;

    assert_eq!(
        user_sdk.note.get(1).await.unwrap_err().status(),
        Some(StatusCode::NOT_FOUND)
    );

    let res = user_sdk
        .note
        .update(UpdateNoteInput {
            contest_id: 1,
            note: "Practice segment trees".into(),
        })
        .await
        .expect("Expected to save note");
    assert_eq!(res.note.map(|n| n.note), Some("Practice segment trees".into()));

    let note = user_sdk.note.get(1).await.expect("Expected note");
    assert_eq!(note.note, "Practice segment trees");

    let res = user_sdk
        .note
        .update(UpdateNoteInput {
            contest_id: 1,
            note: "  ".into(),
        })
        .await
        .expect("Expected to remove note");
    assert!(res.note.is_none());
    assert!(user_sdk.note.get(1).await.is_err());
}

#[actix_web::main]
#[test]
async fn test_contests_are_public() {
    let (_, sdk) = spawn_app().await;
    let contests = sdk
        .contest
        .get_all()
        .await
        .expect("Expected contests")
        .contests;
    assert_eq!(contests.len(), 3);
    assert_eq!(contests[0].platform, Some(Platform::Codeforces));
    assert_eq!(contests[2].platform, None);
}
