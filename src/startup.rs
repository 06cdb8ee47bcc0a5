use std::path::Path;

use crate::{
    config::Config,
    error::AppError,
    service::self_role::{load_catalog, SelfRoleService},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Loads the self-role catalog from `SELFROLES_PATH`.
///
/// An unset path yields an empty catalog; a set path that cannot be read or parsed
/// fails startup.
pub fn load_self_roles(config: &Config) -> Result<SelfRoleService, AppError> {
    let Some(path) = config.selfroles_path.as_deref() else {
        tracing::info!("SELFROLES_PATH not set, self roles disabled");
        return Ok(SelfRoleService::default());
    };

    let catalog = load_catalog(Path::new(path))?;

    Ok(SelfRoleService::new(catalog))
}
