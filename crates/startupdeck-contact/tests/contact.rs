use startupdeck_contact::{ContactClient, ContactMessage};

#[test]
fn complete_message_validates() {
    let message = ContactMessage::new(
        "Ada",
        "ada@example.com",
        "Partnership",
        "I'd like to talk about a partnership.",
    );
    assert!(message.validate().is_ok());
}

#[test]
fn blank_fields_are_reported_by_name() {
    let message = ContactMessage::new("", "ada@example.com", "   ", "hello");
    let err = message.validate().unwrap_err();
    let text = err.to_string();
    assert!(text.contains("Missing required fields"));
    assert!(text.contains("name"));
    assert!(text.contains("subject"));
    assert!(!text.contains("email"));
}

#[tokio::test]
async fn send_rejects_invalid_messages_before_dispatch() {
    // Unroutable endpoint: validation must fail first, no connection attempt.
    let client = ContactClient::new("http://127.0.0.1:0/api/contact");
    let message = ContactMessage::new("Ada", "", "Hi", "Hello there");
    let err = client.send(&message).await.unwrap_err();
    assert!(err.to_string().contains("email"));
}
