//! Repository Integration Tests
//!
//! Service flows run against the in-memory backend.

#[cfg(test)]
mod tests {
    use crate::domain::{
        upload_path, AuthForm, AuthMode, DomainError, DraftError, ListingDraft, RentalRow, RentalStatus, Session, Tone,
    };
    use crate::repository::{AuthProvider, Bucket, MemoryBackend, ObjectStorage, DEMO_EMAIL, DEMO_PASSWORD};
    use crate::service::{self, auth, PhotoUpload, PublishError};

    const NOW: i64 = 1_700_000_000_000;

    fn sign_in_form(email: &str, password: &str) -> AuthForm {
        AuthForm {
            mode: AuthMode::SignIn,
            email: email.to_string(),
            password: password.to_string(),
            name: String::new(),
        }
    }

    fn sign_up_form(email: &str, name: &str) -> AuthForm {
        AuthForm {
            mode: AuthMode::SignUp,
            email: email.to_string(),
            password: "secret1".to_string(),
            name: name.to_string(),
        }
    }

    fn draft() -> ListingDraft {
        ListingDraft {
            title: "Лобзик Bosch".to_string(),
            category: "tools".to_string(),
            description: "Почти новый".to_string(),
            price: "300".to_string(),
            deposit: "3000".to_string(),
            min_days: "1".to_string(),
            location: "Москва".to_string(),
            conditions: String::new(),
            confirmed: true,
        }
    }

    fn photo(name: &str) -> PhotoUpload {
        PhotoUpload {
            file_name: name.to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    async fn signed_up(backend: &MemoryBackend, email: &str, name: &str) -> Session {
        auth::submit(backend, &sign_up_form(email, name))
            .await
            .session
            .expect("memory sign-up returns a session")
    }

    #[tokio::test]
    async fn test_catalog_join_path() {
        let backend = MemoryBackend::seeded();

        let listings = service::fetch_catalog(&backend).await;
        assert_eq!(listings.len(), 6);
        assert_eq!(listings[0].title, "Перфоратор Bosch GBH 2-26");
        assert_eq!(listings[0].owner.name, "Алексей М.");
        assert_eq!(listings[0].owner.rentals_count, 32);
        assert_eq!(listings[0].cover_image(), "/placeholder.svg");
    }

    #[tokio::test]
    async fn test_fallback_matches_join() {
        let backend = MemoryBackend::seeded();
        let joined = service::fetch_catalog(&backend).await;

        backend.set_fail_owner_join(true);
        let fallback = service::fetch_catalog(&backend).await;

        assert!(!joined.is_empty());
        assert_eq!(joined, fallback);
    }

    #[tokio::test]
    async fn test_empty_store_gives_empty_catalog() {
        let backend = MemoryBackend::new();
        backend.set_fail_owner_join(true);

        assert!(service::fetch_catalog(&backend).await.is_empty());
    }

    #[tokio::test]
    async fn test_fallback_items_failure_gives_empty_catalog() {
        let backend = MemoryBackend::seeded();
        backend.set_fail_owner_join(true);
        backend.set_fail_item_list(true);

        assert!(service::fetch_catalog(&backend).await.is_empty());
    }

    #[tokio::test]
    async fn test_fallback_profile_failure_uses_default_owners() {
        let backend = MemoryBackend::seeded();
        backend.set_fail_owner_join(true);
        backend.set_fail_profile_list(true);

        let listings = service::fetch_catalog(&backend).await;

        assert_eq!(listings.len(), 6);
        assert!(listings.iter().all(|l| l.owner.name == "Пользователь"));
        assert!(listings.iter().all(|l| l.owner.rating == 0.0 && l.owner.rentals_count == 0));
    }

    #[tokio::test]
    async fn test_popular_profile_failure_keeps_items() {
        let backend = MemoryBackend::seeded();
        backend.set_fail_profile_list(true);

        let popular = service::fetch_popular(&backend).await.expect("Popular failed");

        assert_eq!(popular.len(), 6);
        assert_eq!(popular[0].owner.name, "Пользователь");
    }

    #[tokio::test]
    async fn test_malformed_item_id_reads_as_missing() {
        let backend = MemoryBackend::seeded();

        let missing = service::fetch_item_detail(&backend, "not an id")
            .await
            .expect("Malformed id should not be an error");

        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_item_detail() {
        let backend = MemoryBackend::seeded();

        let found = service::fetch_item_detail(&backend, "3").await.expect("Detail failed");
        let listing = found.expect("seeded item exists");
        assert_eq!(listing.title, "Детская коляска Bugaboo Fox 3");
        assert_eq!(listing.min_days, 3);
        assert_eq!(listing.owner.name, "Елена В.");

        let missing = service::fetch_item_detail(&backend, "nope").await.expect("Detail failed");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_invalid_sign_in_stays_signed_out() {
        let backend = MemoryBackend::seeded();

        let outcome = auth::submit(&backend, &sign_in_form(DEMO_EMAIL, "wrong-password")).await;

        assert!(outcome.session.is_none());
        assert_eq!(outcome.notice.tone, Tone::Destructive);
        assert_eq!(outcome.notice.title, "Ошибка входа");
        assert_eq!(outcome.notice.description.as_deref(), Some("Invalid login credentials"));
        assert!(backend.session().is_none());
    }

    #[tokio::test]
    async fn test_sign_in_demo_account() {
        let backend = MemoryBackend::seeded();

        let outcome = auth::submit(&backend, &sign_in_form(DEMO_EMAIL, DEMO_PASSWORD)).await;

        let session = outcome.session.expect("signed in");
        assert_eq!(outcome.notice.title, "Добро пожаловать!");
        assert_eq!(session.user.display_name(), "Гость");
        assert_eq!(backend.session(), Some(session));
    }

    #[tokio::test]
    async fn test_short_password_is_rejected_before_provider() {
        let backend = MemoryBackend::seeded();

        let outcome = auth::submit(&backend, &sign_in_form(DEMO_EMAIL, "123")).await;

        assert!(outcome.session.is_none());
        assert!(outcome.notice.is_error());
    }

    #[tokio::test]
    async fn test_sign_up_creates_profile() {
        let backend = MemoryBackend::new();

        let session = signed_up(&backend, "anna@example.com", "Анна").await;

        let profile = service::load_profile(&backend, &session.user.id)
            .await
            .expect("Load failed")
            .expect("profile created on sign-up");
        assert_eq!(profile.name, "Анна");

        let again = auth::submit(&backend, &sign_up_form("anna@example.com", "Анна")).await;
        assert!(again.session.is_none());
        assert_eq!(again.notice.title, "Ошибка регистрации");
    }

    #[tokio::test]
    async fn test_sign_up_with_session_welcomes() {
        let backend = MemoryBackend::new();

        let outcome = auth::submit(&backend, &sign_up_form("new@example.com", "Новый")).await;

        assert!(outcome.session.is_some());
        assert_eq!(outcome.notice.title, "Добро пожаловать!");
        assert!(outcome.notice.description.is_none());
    }

    #[tokio::test]
    async fn test_sign_out_clears_session() {
        let backend = MemoryBackend::new();
        signed_up(&backend, "a@example.com", "A").await;

        auth::sign_out(&backend).await;

        assert!(backend.session().is_none());
    }

    #[tokio::test]
    async fn test_restored_session_of_unknown_user_is_ignored() {
        let backend = MemoryBackend::seeded();
        let mut stranger = signed_up(&MemoryBackend::new(), "x@example.com", "X").await;
        stranger.user.id = "user-404".to_string();

        backend.set_session(Some(&stranger));

        assert!(backend.session().is_none());
    }

    #[tokio::test]
    async fn test_unconfirmed_draft_uploads_nothing() {
        let backend = MemoryBackend::new();
        let session = signed_up(&backend, "a@example.com", "A").await;
        let mut draft = draft();
        draft.confirmed = false;

        let err = service::publish_listing(&backend, &draft, Some(&session), vec![photo("a.png")], NOW)
            .await
            .unwrap_err();

        assert_eq!(err, PublishError::Draft(DraftError::ConditionNotConfirmed));
        assert_eq!(err.notice().description.as_deref(), Some("Подтвердите состояние вещи"));
        assert_eq!(backend.object_count(), 0);
        assert!(service::fetch_catalog(&backend).await.is_empty());
    }

    #[tokio::test]
    async fn test_publish_without_session() {
        let backend = MemoryBackend::new();

        let err = service::publish_listing(&backend, &draft(), None, Vec::new(), NOW)
            .await
            .unwrap_err();

        assert!(err.needs_sign_in());
        assert_eq!(err.notice().title, "Войдите в аккаунт");
    }

    #[tokio::test]
    async fn test_publish_rejects_sixth_photo() {
        let backend = MemoryBackend::new();
        let session = signed_up(&backend, "a@example.com", "A").await;
        let photos = (0..6).map(|n| photo(&format!("{}.png", n))).collect();

        let err = service::publish_listing(&backend, &draft(), Some(&session), photos, NOW)
            .await
            .unwrap_err();

        assert_eq!(err.notice().title, "Максимум 5 фото");
        assert_eq!(backend.object_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_upload_aborts_before_insert() {
        let backend = MemoryBackend::seeded();
        let session = signed_up(&backend, "owner@example.com", "Олег").await;
        // Second photo's object already exists
        let taken = upload_path(&session.user.id, NOW + 1, "side.png");
        backend
            .upload(Bucket::ItemImages, &taken, vec![1], "image/png")
            .await
            .expect("Upload failed");

        let err = service::publish_listing(
            &backend,
            &draft(),
            Some(&session),
            vec![photo("front.png"), photo("side.png"), photo("back.png")],
            NOW,
        )
        .await
        .unwrap_err();

        match &err {
            PublishError::Upload { file_name, source } => {
                assert_eq!(file_name, "side.png");
                assert!(matches!(source, DomainError::Backend { status: 409, .. }));
            }
            other => panic!("expected upload error, got {:?}", other),
        }
        assert_eq!(err.notice().title, "Ошибка загрузки фото");
        // front.png went up, back.png was never tried
        assert_eq!(backend.object_count(), 2);
        assert_eq!(service::fetch_catalog(&backend).await.len(), 6);
        let own = service::fetch_owner_listings(&backend, &session.user.id, None)
            .await
            .expect("Own listings failed");
        assert!(own.is_empty());
    }

    #[tokio::test]
    async fn test_publish_listing() {
        let backend = MemoryBackend::seeded();
        let session = signed_up(&backend, "owner@example.com", "Олег").await;

        let row = service::publish_listing(
            &backend,
            &draft(),
            Some(&session),
            vec![photo("front.png"), photo("side.png")],
            NOW,
        )
        .await
        .expect("Publish failed");

        assert_eq!(row.owner_id, session.user.id);
        assert_eq!(row.conditions, None);
        assert_eq!(backend.object_count(), 2);

        let catalog = service::fetch_catalog(&backend).await;
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog[0].id, row.id);
        assert_eq!(catalog[0].owner.name, "Олег");
        assert_eq!(catalog[0].images.len(), 2);
        assert!(catalog[0].cover_image().starts_with("data:image/png;base64,"));

        let popular = service::fetch_popular(&backend).await.expect("Popular failed");
        assert_eq!(popular.len(), 6);
        assert_eq!(popular[0].id, row.id);

        let own = service::fetch_owner_listings(&backend, &session.user.id, None)
            .await
            .expect("Own listings failed");
        assert_eq!(own.len(), 1);
    }

    #[tokio::test]
    async fn test_profile_edit_and_avatar() {
        let backend = MemoryBackend::new();
        let session = signed_up(&backend, "a@example.com", "A").await;
        let user_id = session.user.id.as_str();

        service::save_contact(&backend, user_id, "  Алиса ", "+7 900 000-00-00")
            .await
            .expect("Save failed");
        let url = service::upload_avatar(&backend, user_id, photo("me.png"), NOW)
            .await
            .expect("Avatar failed");

        let profile = service::load_profile(&backend, user_id)
            .await
            .expect("Load failed")
            .expect("profile exists");
        assert_eq!(profile.name, "Алиса");
        assert_eq!(profile.phone.as_deref(), Some("+7 900 000-00-00"));
        assert_eq!(profile.avatar_url, Some(url));
    }

    #[tokio::test]
    async fn test_profile_of_other_user_is_read_only() {
        let backend = MemoryBackend::seeded();
        signed_up(&backend, "a@example.com", "A").await;

        let result = service::save_contact(&backend, "owner-1", "Hacker", "").await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_my_rentals() {
        let backend = MemoryBackend::seeded();
        let session = auth::submit(&backend, &sign_in_form(DEMO_EMAIL, DEMO_PASSWORD))
            .await
            .session
            .expect("signed in");
        backend.add_rental(RentalRow {
            id: "rental-2".to_string(),
            item_id: "gone".to_string(),
            owner_id: "owner-1".to_string(),
            renter_id: session.user.id.clone(),
            start_date: "2024-08-01".to_string(),
            end_date: "2024-08-02".to_string(),
            total_price: 1000,
            deposit_amount: 5000,
            platform_fee: 150,
            status: RentalStatus::Pending,
            created_at: None,
            updated_at: None,
        });

        let rentals = service::fetch_my_rentals(&backend, &session.user.id)
            .await
            .expect("Rentals failed");

        assert_eq!(rentals.len(), 2);
        assert_eq!(rentals[0].id, "rental-2");
        assert_eq!(rentals[0].item_title, None);
        assert_eq!(rentals[0].status_label, "Ожидает подтверждения");
        assert_eq!(rentals[1].item_title.as_deref(), Some("Проектор Epson EH-TW750"));
        assert_eq!(rentals[1].period, "12.07.2024 – 14.07.2024 · 3 дн.");
        assert_eq!(rentals[0].period, "01.08.2024 – 02.08.2024 · 2 дн.");
        assert_eq!(rentals[1].total, "4\u{a0}500 ₽");
        assert_eq!(rentals[1].status_label, "Завершена");

        let nobody = service::fetch_my_rentals(&backend, "owner-1").await.expect("Rentals failed");
        assert!(nobody.is_empty());
    }
}
