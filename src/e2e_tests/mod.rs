#[cfg(test)]
mod tests {
    use tokio::runtime::Handle;

    use crate::config::UserDirectoryConfig;
    use crate::controller::FetchController;
    use crate::model::Phase;
    use crate::service::UserDirectory;

    // talks to the public user directory configured by default
    #[tokio::test]
    async fn test_e2e_user_directory() {
        let directory = UserDirectory::new(&UserDirectoryConfig::default()).unwrap();
        let users = FetchController::new(Handle::current());
        let profile = FetchController::new(Handle::current());

        let listed = users.start(directory.list(5)).unwrap();
        let first = profile.start(directory.get(1)).unwrap();
        let second = profile.start(directory.get(2)).unwrap();

        assert!(listed.wait().await);
        assert!(!first.wait().await, "user 1 was superseded by user 2");
        assert!(second.wait().await);

        let listed = users.current_state();
        assert_eq!(listed.phase(), Phase::Success);
        assert_eq!(listed.data().map(|u| u.len()), Some(5));
        assert_eq!(profile.current_state().data().map(|u| u.id), Some(2));
    }
}
