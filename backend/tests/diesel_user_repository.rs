//! Integration tests for `DieselUserRepository` against embedded PostgreSQL.
//!
//! Set `SKIP_TEST_CLUSTER=1` where the cluster cannot start.

use pg_embedded_setup_unpriv::TemporaryDatabase;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

use users_api::domain::ports::{UserPersistenceError, UserRepository};
use users_api::domain::{NewUser, User, UserId};
use users_api::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};

#[path = "support/cluster.rs"]
mod cluster;

use cluster::{drop_table, handle_cluster_setup_failure, provision_database};

struct TestContext {
    runtime: Runtime,
    repository: DieselUserRepository,
    database_url: String,
    _database: TemporaryDatabase,
}

fn setup_context() -> Result<TestContext, String> {
    let database = provision_database()?;
    let database_url = database.url().to_string();

    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let config = PoolConfig::new(database_url.as_str())
        .with_max_size(2)
        .with_min_idle(None);
    let pool = runtime.block_on(async { DbPool::lazy(config) });

    Ok(TestContext {
        runtime,
        repository: DieselUserRepository::new(pool),
        database_url,
        _database: database,
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn new_user(firstname: &str, lastname: &str) -> NewUser {
    NewUser::try_new(firstname, lastname).expect("valid user")
}

#[rstest]
fn inserted_rows_receive_serial_ids(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: inserted_rows_receive_serial_ids skipped");
        return;
    };
    let repository = context.repository.clone();

    let (mut listed, found) = context.runtime.block_on(async {
        repository
            .insert(&new_user("Jane", "Doe"))
            .await
            .expect("insert Jane");
        repository
            .insert(&new_user("Ada", "Lovelace"))
            .await
            .expect("insert Ada");
        let listed = repository.list_all().await.expect("list users");
        let found = repository
            .find_by_id(UserId::new(2))
            .await
            .expect("find Ada");
        (listed, found)
    });

    listed.sort_by_key(|user| user.id().as_i32());
    assert_eq!(
        listed,
        vec![
            User::new(UserId::new(1), "Jane", "Doe"),
            User::new(UserId::new(2), "Ada", "Lovelace"),
        ]
    );
    assert_eq!(found, User::new(UserId::new(2), "Ada", "Lovelace"));
}

#[rstest]
fn empty_table_lists_nothing(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: empty_table_lists_nothing skipped");
        return;
    };

    let listed = context
        .runtime
        .block_on(context.repository.list_all())
        .expect("list users");
    assert!(listed.is_empty());
}

#[rstest]
fn missing_id_is_reported_as_not_found(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: missing_id_is_reported_as_not_found skipped");
        return;
    };

    let error = context
        .runtime
        .block_on(context.repository.find_by_id(UserId::new(9999)))
        .expect_err("no row with id 9999");
    assert_eq!(error, UserPersistenceError::not_found(UserId::new(9999)));
}

#[rstest]
fn dropped_table_surfaces_driver_text(repo_context: Option<TestContext>) {
    let Some(context) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: dropped_table_surfaces_driver_text skipped");
        return;
    };
    drop_table(context.database_url.as_str(), "users").expect("drop users table");

    let error = context
        .runtime
        .block_on(context.repository.list_all())
        .expect_err("query against a missing table fails");
    match error {
        UserPersistenceError::Query { message } => {
            assert!(message.contains("users"), "unexpected driver text: {message}");
        }
        other => panic!("expected a query error, got {other:?}"),
    }
}
