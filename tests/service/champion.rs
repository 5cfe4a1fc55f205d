use podium::server::{error::Error, model::app::AppState, service::champion::ChampionService};

use crate::util::setup::{champion_form, create_champion, create_user, test_setup};

#[tokio::test]
/// Expect a full snapshot pushed to live subscribers after a create
async fn publishes_snapshot_after_create() -> Result<(), Error> {
    let test = test_setup().await;
    let state: AppState = test.state();
    let user = create_user(&test).await?;
    let mut rx = state.snapshots.subscribe();

    let service = ChampionService::new(&state.db, &state.snapshots);
    service
        .create(
            &champion_form("All England Open", "2024-03-05", "Li Shifeng"),
            user.id,
        )
        .await?;

    let snapshot = rx.recv().await.expect("expected a snapshot");
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].winner, "Li Shifeng");

    Ok(())
}

#[tokio::test]
/// Expect the snapshot after an update to carry the overwritten record
async fn publishes_snapshot_after_update() -> Result<(), Error> {
    let test = test_setup().await;
    let state: AppState = test.state();
    let user = create_user(&test).await?;
    let champion =
        create_champion(&test, "Denmark Open", "2023-10-22", "Viktor Axelsen", user.id).await?;
    let mut rx = state.snapshots.subscribe();

    let service = ChampionService::new(&state.db, &state.snapshots);
    service
        .update(
            champion.id,
            &champion_form("Denmark Open", "2023-10-22", "Anders Antonsen"),
        )
        .await?;

    let snapshot = rx.recv().await.expect("expected a snapshot");
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].winner, "Anders Antonsen");

    Ok(())
}

#[tokio::test]
/// Expect an empty snapshot after the last record is deleted
async fn publishes_snapshot_after_delete() -> Result<(), Error> {
    let test = test_setup().await;
    let state: AppState = test.state();
    let user = create_user(&test).await?;
    let champion =
        create_champion(&test, "French Open", "2024-03-10", "Lee Zii Jia", user.id).await?;
    let mut rx = state.snapshots.subscribe();

    let service = ChampionService::new(&state.db, &state.snapshots);
    service.delete(champion.id).await?;

    let snapshot = rx.recv().await.expect("expected a snapshot");
    assert!(snapshot.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect writes to succeed when nobody is subscribed to snapshots
async fn write_succeeds_with_no_subscribers() -> Result<(), Error> {
    let test = test_setup().await;
    let state: AppState = test.state();
    let user = create_user(&test).await?;

    let service = ChampionService::new(&state.db, &state.snapshots);
    let result = service
        .create(
            &champion_form("All England Open", "2024-03-05", "Li Shifeng"),
            user.id,
        )
        .await;

    assert!(result.is_ok());

    Ok(())
}

#[tokio::test]
/// Expect no snapshot when a failed write never reaches the store
async fn failed_write_publishes_nothing() -> Result<(), Error> {
    let test = test_setup().await;
    let state: AppState = test.state();
    let user = create_user(&test).await?;
    let mut rx = state.snapshots.subscribe();

    let service = ChampionService::new(&state.db, &state.snapshots);
    let result = service
        .create(&champion_form("", "2024-03-05", "Li Shifeng"), user.id)
        .await;

    assert!(result.is_err());
    assert!(rx.try_recv().is_err());

    Ok(())
}
