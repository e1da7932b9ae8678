use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use storage_traits::{StorageDynT, TransactionDynT};
use wallet_owner_core::{
    MessageBody, WalletOwner, WalletOwnerCandidate, MSG_CREATE_FAILED, MSG_DELETE_FAILED,
    MSG_GET_FAILED, MSG_LIST_FAILED, MSG_MALFORMED_PAYLOAD, MSG_OWNER_DELETED,
    MSG_OWNER_NOT_FOUND, MSG_SEARCH_FAILED, MSG_SEARCH_QUERY_REQUIRED, MSG_UPDATE_FAILED,
};
use wallet_owner_store::{Error, WalletOwnerStore};

type ErrorResponse = (StatusCode, Json<MessageBody>);

pub fn get_routes(wallet_owner_store: WalletOwnerStore) -> Router {
    Router::new()
        .route(
            "/api/wallet-owners",
            get(list_wallet_owners).post(create_wallet_owner),
        )
        // Static segments take precedence over the :id capture.
        .route("/api/wallet-owners/search", get(search_wallet_owners))
        .route(
            "/api/wallet-owners/:id",
            get(get_wallet_owner)
                .put(update_wallet_owner)
                .delete(delete_wallet_owner),
        )
        .with_state(wallet_owner_store)
}

fn error_response(status_code: StatusCode, message: &str) -> ErrorResponse {
    (status_code, Json(MessageBody::new(message)))
}

/// Client errors carry their localized message.  Anything else is logged and reported with the
/// operation's generic failure message, so that internal details never reach the client.
fn map_store_error(err: Error, failure_message: &'static str) -> ErrorResponse {
    match err {
        Error::Validation(validation_error) => {
            error_response(StatusCode::BAD_REQUEST, validation_error.message())
        }
        Error::AlreadyExists(unique_field) => error_response(
            StatusCode::BAD_REQUEST,
            unique_field.already_registered_message(),
        ),
        Error::NotFound(_) => error_response(StatusCode::NOT_FOUND, MSG_OWNER_NOT_FOUND),
        Error::RecordCorruption(_) | Error::StorageError(_) => {
            tracing::error!("{}", err);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, failure_message)
        }
    }
}

async fn begin_transaction(
    wallet_owner_store: &WalletOwnerStore,
    failure_message: &'static str,
) -> Result<Box<dyn TransactionDynT>, ErrorResponse> {
    wallet_owner_store
        .begin_transaction()
        .await
        .map_err(|err| map_store_error(err.into(), failure_message))
}

async fn commit_transaction(
    transaction_b: Box<dyn TransactionDynT>,
    failure_message: &'static str,
) -> Result<(), ErrorResponse> {
    transaction_b
        .commit()
        .await
        .map_err(|err| map_store_error(err.into(), failure_message))
}

#[tracing::instrument(err(level = "debug", Debug), skip(wallet_owner_store))]
async fn list_wallet_owners(
    State(wallet_owner_store): State<WalletOwnerStore>,
) -> Result<Json<Vec<WalletOwner>>, ErrorResponse> {
    let mut transaction_b = begin_transaction(&wallet_owner_store, MSG_LIST_FAILED).await?;
    let wallet_owner_v = wallet_owner_store
        .get_all_wallet_owners(Some(transaction_b.as_mut()))
        .await
        .map_err(|err| map_store_error(err, MSG_LIST_FAILED))?;
    commit_transaction(transaction_b, MSG_LIST_FAILED).await?;
    Ok(Json(wallet_owner_v))
}

#[tracing::instrument(err(level = "debug", Debug), skip(wallet_owner_store))]
async fn search_wallet_owners(
    State(wallet_owner_store): State<WalletOwnerStore>,
    Query(query_param_v): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<WalletOwner>>, ErrorResponse> {
    // Exactly one non-empty q is accepted; a repeated q is as unusable as a missing one.
    let mut search_query_v = query_param_v
        .iter()
        .filter(|(name, _)| name == "q")
        .map(|(_, value)| value.as_str());
    let search_query = match (search_query_v.next(), search_query_v.next()) {
        (Some(search_query), None) if !search_query.is_empty() => search_query,
        _ => {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                MSG_SEARCH_QUERY_REQUIRED,
            ));
        }
    };

    let mut transaction_b = begin_transaction(&wallet_owner_store, MSG_SEARCH_FAILED).await?;
    let wallet_owner_v = wallet_owner_store
        .search_wallet_owners(Some(transaction_b.as_mut()), search_query)
        .await
        .map_err(|err| map_store_error(err, MSG_SEARCH_FAILED))?;
    commit_transaction(transaction_b, MSG_SEARCH_FAILED).await?;
    Ok(Json(wallet_owner_v))
}

#[tracing::instrument(err(level = "debug", Debug), skip(wallet_owner_store))]
async fn get_wallet_owner(
    State(wallet_owner_store): State<WalletOwnerStore>,
    Path(id): Path<String>,
) -> Result<Json<WalletOwner>, ErrorResponse> {
    let mut transaction_b = begin_transaction(&wallet_owner_store, MSG_GET_FAILED).await?;
    let wallet_owner = wallet_owner_store
        .get_wallet_owner(Some(transaction_b.as_mut()), &id)
        .await
        .map_err(|err| map_store_error(err, MSG_GET_FAILED))?
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, MSG_OWNER_NOT_FOUND))?;
    commit_transaction(transaction_b, MSG_GET_FAILED).await?;
    Ok(Json(wallet_owner))
}

#[tracing::instrument(err(level = "debug", Debug), skip(wallet_owner_store))]
async fn create_wallet_owner(
    State(wallet_owner_store): State<WalletOwnerStore>,
    payload: Result<Json<WalletOwnerCandidate>, JsonRejection>,
) -> Result<(StatusCode, Json<WalletOwner>), ErrorResponse> {
    let Json(wallet_owner_candidate) = payload.map_err(|json_rejection| {
        tracing::debug!("rejected create payload: {}", json_rejection);
        error_response(StatusCode::BAD_REQUEST, MSG_MALFORMED_PAYLOAD)
    })?;

    let mut transaction_b = begin_transaction(&wallet_owner_store, MSG_CREATE_FAILED).await?;
    let wallet_owner = wallet_owner_store
        .validate_and_add_wallet_owner(Some(transaction_b.as_mut()), &wallet_owner_candidate)
        .await
        .map_err(|err| map_store_error(err, MSG_CREATE_FAILED))?;
    commit_transaction(transaction_b, MSG_CREATE_FAILED).await?;
    Ok((StatusCode::CREATED, Json(wallet_owner)))
}

#[tracing::instrument(err(level = "debug", Debug), skip(wallet_owner_store))]
async fn update_wallet_owner(
    State(wallet_owner_store): State<WalletOwnerStore>,
    Path(id): Path<String>,
    payload: Result<Json<WalletOwnerCandidate>, JsonRejection>,
) -> Result<Json<WalletOwner>, ErrorResponse> {
    let Json(wallet_owner_candidate) = payload.map_err(|json_rejection| {
        tracing::debug!("rejected update payload: {}", json_rejection);
        error_response(StatusCode::BAD_REQUEST, MSG_MALFORMED_PAYLOAD)
    })?;

    let mut transaction_b = begin_transaction(&wallet_owner_store, MSG_UPDATE_FAILED).await?;
    let wallet_owner = wallet_owner_store
        .validate_and_update_wallet_owner(
            Some(transaction_b.as_mut()),
            &id,
            &wallet_owner_candidate,
        )
        .await
        .map_err(|err| map_store_error(err, MSG_UPDATE_FAILED))?;
    commit_transaction(transaction_b, MSG_UPDATE_FAILED).await?;
    Ok(Json(wallet_owner))
}

#[tracing::instrument(err(level = "debug", Debug), skip(wallet_owner_store))]
async fn delete_wallet_owner(
    State(wallet_owner_store): State<WalletOwnerStore>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ErrorResponse> {
    let mut transaction_b = begin_transaction(&wallet_owner_store, MSG_DELETE_FAILED).await?;
    wallet_owner_store
        .delete_wallet_owner(Some(transaction_b.as_mut()), &id)
        .await
        .map_err(|err| map_store_error(err, MSG_DELETE_FAILED))?;
    commit_transaction(transaction_b, MSG_DELETE_FAILED).await?;
    Ok(Json(MessageBody::new(MSG_OWNER_DELETED)))
}
