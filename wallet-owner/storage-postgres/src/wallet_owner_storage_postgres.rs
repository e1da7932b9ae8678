use sqlx::PgPool;
use storage_traits::{downcast_transaction_mut, TransactionDynT};
use wallet_owner_core::{WalletOwner, WalletOwnerInsert, WalletOwnerUpdate};
use wallet_owner_store::{fold_case, Error, Result, WalletOwnerFilter};

type PgTransaction = sqlx::Transaction<'static, sqlx::Postgres>;

#[derive(Clone)]
pub struct WalletOwnerStoragePostgres {
    pg_pool: PgPool,
}

impl WalletOwnerStoragePostgres {
    pub async fn open_and_run_migrations(pg_pool: PgPool) -> Result<Self> {
        sqlx::migrate!().run(&pg_pool).await.map_err(|err| {
            Error::StorageError(
                format!(
                    "Failed to run Postgres database migrations; error was: {}",
                    err
                )
                .into(),
            )
        })?;
        Ok(Self { pg_pool })
    }
    async fn get_wallet_owner_where(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        // Must be a trusted column name, never user input.
        column: &'static str,
        value: &str,
    ) -> Result<Option<WalletOwner>> {
        let sql = format!(
            r#"
                select id, name, id_card, wallet_number, phone, created_at
                from wallet_owners
                where {} = $1
            "#,
            column
        );
        let query = sqlx::query_as::<_, WalletOwnerRowPostgres>(&sql).bind(value);
        let wallet_owner_row_o = if let Some(transaction) = transaction_o {
            query
                .fetch_optional(downcast_transaction_mut::<PgTransaction>(transaction)?.as_mut())
                .await?
        } else {
            query.fetch_optional(&self.pg_pool).await?
        };
        Ok(wallet_owner_row_o.map(WalletOwner::from))
    }
}

#[async_trait::async_trait]
impl storage_traits::StorageDynT for WalletOwnerStoragePostgres {
    async fn begin_transaction(
        &self,
    ) -> storage_traits::Result<Box<dyn storage_traits::TransactionDynT>> {
        Ok(Box::new(self.pg_pool.begin().await?))
    }
}

#[async_trait::async_trait]
impl wallet_owner_store::WalletOwnerStorage for WalletOwnerStoragePostgres {
    async fn add_wallet_owner(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        wallet_owner_insert: &WalletOwnerInsert,
    ) -> Result<WalletOwner> {
        let wallet_owner = WalletOwner::create(wallet_owner_insert);
        let query = sqlx::query(
            r#"
                insert into wallet_owners(
                    id, name, id_card, wallet_number, phone, created_at,
                    name_folded, id_card_folded, wallet_number_folded, phone_folded
                )
                values ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(wallet_owner.id.as_str())
        .bind(wallet_owner.name.as_str())
        .bind(wallet_owner.id_card.as_str())
        .bind(wallet_owner.wallet_number.as_str())
        .bind(wallet_owner.phone_o.as_deref())
        .bind(wallet_owner.created_at)
        .bind(fold_case(&wallet_owner.name))
        .bind(fold_case(&wallet_owner.id_card))
        .bind(fold_case(&wallet_owner.wallet_number))
        .bind(wallet_owner.phone_o.as_deref().map(fold_case));
        if let Some(transaction) = transaction_o {
            query
                .execute(downcast_transaction_mut::<PgTransaction>(transaction)?.as_mut())
                .await?;
        } else {
            query.execute(&self.pg_pool).await?;
        }
        Ok(wallet_owner)
    }
    async fn get_wallet_owner(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        id: &str,
    ) -> Result<Option<WalletOwner>> {
        self.get_wallet_owner_where(transaction_o, "id", id).await
    }
    async fn get_wallet_owner_with_id_card(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        id_card: &str,
    ) -> Result<Option<WalletOwner>> {
        self.get_wallet_owner_where(transaction_o, "id_card", id_card)
            .await
    }
    async fn get_wallet_owner_with_wallet_number(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        wallet_number: &str,
    ) -> Result<Option<WalletOwner>> {
        self.get_wallet_owner_where(transaction_o, "wallet_number", wallet_number)
            .await
    }
    async fn get_wallet_owners(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        wallet_owner_filter: &WalletOwnerFilter,
    ) -> Result<Vec<WalletOwner>> {
        let folded_search_query_o = wallet_owner_filter.folded_search_query_o();
        let query = sqlx::query_as::<_, WalletOwnerRowPostgres>(
            r#"
                select id, name, id_card, wallet_number, phone, created_at
                from wallet_owners
                where $1::text IS NULL OR
                      strpos(name_folded, $1) > 0 OR
                      strpos(id_card_folded, $1) > 0 OR
                      strpos(wallet_number_folded, $1) > 0 OR
                      strpos(phone_folded, $1) > 0
                order by created_at desc, seq desc
            "#,
        )
        .bind(folded_search_query_o);
        let wallet_owner_row_v = if let Some(transaction) = transaction_o {
            query
                .fetch_all(downcast_transaction_mut::<PgTransaction>(transaction)?.as_mut())
                .await?
        } else {
            query.fetch_all(&self.pg_pool).await?
        };
        Ok(wallet_owner_row_v
            .into_iter()
            .map(WalletOwner::from)
            .collect())
    }
    async fn update_wallet_owner(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        wallet_owner_update: &WalletOwnerUpdate,
    ) -> Result<Option<WalletOwner>> {
        let set_phone = wallet_owner_update.phone_oo.is_some();
        let phone_o = wallet_owner_update.phone_oo.clone().flatten();
        let query = sqlx::query_as::<_, WalletOwnerRowPostgres>(
            r#"
                update wallet_owners
                set name = coalesce($1, name),
                    id_card = coalesce($2, id_card),
                    wallet_number = coalesce($3, wallet_number),
                    phone = case when $4 then $5 else phone end,
                    name_folded = coalesce($7, name_folded),
                    id_card_folded = coalesce($8, id_card_folded),
                    wallet_number_folded = coalesce($9, wallet_number_folded),
                    phone_folded = case when $4 then $10 else phone_folded end
                where id = $6
                returning id, name, id_card, wallet_number, phone, created_at
            "#,
        )
        .bind(wallet_owner_update.name_o.as_deref())
        .bind(wallet_owner_update.id_card_o.as_deref())
        .bind(wallet_owner_update.wallet_number_o.as_deref())
        .bind(set_phone)
        .bind(phone_o.as_deref())
        .bind(wallet_owner_update.id.as_str())
        .bind(wallet_owner_update.name_o.as_deref().map(fold_case))
        .bind(wallet_owner_update.id_card_o.as_deref().map(fold_case))
        .bind(wallet_owner_update.wallet_number_o.as_deref().map(fold_case))
        .bind(phone_o.as_deref().map(fold_case));
        let wallet_owner_row_o = if let Some(transaction) = transaction_o {
            query
                .fetch_optional(downcast_transaction_mut::<PgTransaction>(transaction)?.as_mut())
                .await?
        } else {
            query.fetch_optional(&self.pg_pool).await?
        };
        Ok(wallet_owner_row_o.map(WalletOwner::from))
    }
    async fn delete_wallet_owner(
        &self,
        transaction_o: Option<&mut dyn TransactionDynT>,
        id: &str,
    ) -> Result<bool> {
        let query = sqlx::query("delete from wallet_owners where id = $1").bind(id);
        let query_result = if let Some(transaction) = transaction_o {
            query
                .execute(downcast_transaction_mut::<PgTransaction>(transaction)?.as_mut())
                .await?
        } else {
            query.execute(&self.pg_pool).await?
        };
        Ok(query_result.rows_affected() > 0)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct WalletOwnerRowPostgres {
    id: String,
    name: String,
    id_card: String,
    wallet_number: String,
    phone: Option<String>,
    created_at: time::OffsetDateTime,
}

impl From<WalletOwnerRowPostgres> for WalletOwner {
    fn from(wallet_owner_row: WalletOwnerRowPostgres) -> Self {
        Self {
            id: wallet_owner_row.id,
            name: wallet_owner_row.name,
            id_card: wallet_owner_row.id_card,
            wallet_number: wallet_owner_row.wallet_number,
            phone_o: wallet_owner_row.phone,
            created_at: wallet_owner_row.created_at,
        }
    }
}
