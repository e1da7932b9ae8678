use crate::{Error, QueryCache, QueryKey, Result};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use wallet_owner_core::{
    MessageBody, WalletOwner, WalletOwnerCandidate, MSG_CREATE_FAILED, MSG_DELETE_FAILED,
    MSG_FETCH_FAILED, MSG_GET_FAILED, MSG_UPDATE_FAILED,
};

/// HTTP client for the wallet owners API.  List and search results are cached by QueryKey, and the
/// whole cache is dropped after any successful create, update or delete, since any mutation can
/// change the membership or order of any cached result.  A read that was in flight during a
/// mutation is returned to its caller but not cached.  Clones share the same cache.
#[derive(Clone, Debug)]
pub struct WalletOwnerClient {
    base_url: url::Url,
    cache_la: Arc<RwLock<QueryCache>>,
}

impl WalletOwnerClient {
    /// The base URL is that of the server, e.g. "http://localhost:5000".
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = url::Url::parse(base_url).map_err(|err| {
            Error::MalformedURL(format!("{:?}; error was: {}", base_url, err).into())
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::MalformedURL(
                format!("{:?} can't be used as a base URL", base_url.as_str()).into(),
            ));
        }
        // Url::join replaces the last path segment unless the path ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            cache_la: Arc::new(RwLock::new(QueryCache::new())),
        })
    }
    pub fn base_url(&self) -> &url::Url {
        &self.base_url
    }
    /// All wallet owners, newest first.  Served from the cache if possible.
    pub async fn list_wallet_owners(&self) -> Result<Vec<WalletOwner>> {
        self.cached_get(QueryKey::All).await
    }
    /// Wallet owners matching the query, newest first.  An empty query lists all wallet owners.
    /// Served from the cache if possible.
    pub async fn search_wallet_owners(&self, search_query: &str) -> Result<Vec<WalletOwner>> {
        if search_query.is_empty() {
            self.cached_get(QueryKey::All).await
        } else {
            self.cached_get(QueryKey::Search(search_query.to_string()))
                .await
        }
    }
    /// Not cached.
    pub async fn get_wallet_owner(&self, id: &str) -> Result<WalletOwner> {
        let url = self.wallet_owner_url(id)?;
        let response = send(get_request(&url), MSG_GET_FAILED).await?;
        read_response(response, MSG_GET_FAILED).await
    }
    pub async fn create_wallet_owner(
        &self,
        wallet_owner_candidate: &WalletOwnerCandidate,
    ) -> Result<WalletOwner> {
        let url = self.wallet_owners_url()?;
        let request_builder = crate::REQWEST_CLIENT
            .clone()
            .post(url)
            .json(wallet_owner_candidate);
        let response = send(request_builder, MSG_CREATE_FAILED).await?;
        let wallet_owner = read_response(response, MSG_CREATE_FAILED).await?;
        self.invalidate_cache();
        Ok(wallet_owner)
    }
    /// Only the fields present in the candidate are changed.
    pub async fn update_wallet_owner(
        &self,
        id: &str,
        wallet_owner_candidate: &WalletOwnerCandidate,
    ) -> Result<WalletOwner> {
        let url = self.wallet_owner_url(id)?;
        let request_builder = crate::REQWEST_CLIENT
            .clone()
            .put(url)
            .json(wallet_owner_candidate);
        let response = send(request_builder, MSG_UPDATE_FAILED).await?;
        let wallet_owner = read_response(response, MSG_UPDATE_FAILED).await?;
        self.invalidate_cache();
        Ok(wallet_owner)
    }
    /// Returns the server's confirmation message.
    pub async fn delete_wallet_owner(&self, id: &str) -> Result<String> {
        let url = self.wallet_owner_url(id)?;
        let request_builder = crate::REQWEST_CLIENT.clone().delete(url);
        let response = send(request_builder, MSG_DELETE_FAILED).await?;
        let message_body: MessageBody = read_response(response, MSG_DELETE_FAILED).await?;
        self.invalidate_cache();
        Ok(message_body.message)
    }
    /// Drop every cached list and search result.
    pub fn invalidate_cache(&self) {
        let mut cache_g = self.write_cache();
        tracing::trace!("invalidating {} cached queries", cache_g.len());
        cache_g.invalidate();
    }

    async fn cached_get(&self, query_key: QueryKey) -> Result<Vec<WalletOwner>> {
        let generation = {
            let cache_g = self.read_cache();
            if let Some(wallet_owner_v) = cache_g.get(&query_key) {
                tracing::trace!("cache hit for {:?}", query_key);
                return Ok(wallet_owner_v.clone());
            }
            cache_g.generation()
        };
        tracing::trace!("cache miss for {:?}", query_key);
        let url = match &query_key {
            QueryKey::All => self.wallet_owners_url()?,
            QueryKey::Search(search_query) => {
                let mut url = self.join("api/wallet-owners/search")?;
                url.query_pairs_mut().append_pair("q", search_query);
                url
            }
        };
        let response = send(get_request(&url), MSG_FETCH_FAILED).await?;
        let wallet_owner_v: Vec<WalletOwner> = read_response(response, MSG_FETCH_FAILED).await?;
        if !self
            .write_cache()
            .insert(generation, query_key.clone(), wallet_owner_v.clone())
        {
            tracing::trace!("not caching {:?}; invalidated while in flight", query_key);
        }
        Ok(wallet_owner_v)
    }
    // A poisoned lock still holds a consistent cache, since no cache operation can panic midway.
    fn read_cache(&self) -> RwLockReadGuard<'_, QueryCache> {
        self.cache_la
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
    fn write_cache(&self) -> RwLockWriteGuard<'_, QueryCache> {
        self.cache_la
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
    fn join(&self, path: &str) -> Result<url::Url> {
        self.base_url.join(path).map_err(|err| {
            Error::MalformedURL(format!("{:?}; error was: {}", path, err).into())
        })
    }
    fn wallet_owners_url(&self) -> Result<url::Url> {
        self.join("api/wallet-owners")
    }
    fn wallet_owner_url(&self, id: &str) -> Result<url::Url> {
        let mut url = self.wallet_owners_url()?;
        // Pushing the id as a path segment percent-encodes it.
        let url_string = url.to_string();
        url.path_segments_mut()
            .map_err(|_| {
                Error::MalformedURL(format!("{:?} can't be a base", url_string).into())
            })?
            .push(id);
        Ok(url)
    }
}

fn get_request(url: &url::Url) -> reqwest::RequestBuilder {
    crate::REQWEST_CLIENT.clone().get(url.clone())
}

async fn send(
    request_builder: reqwest::RequestBuilder,
    fallback_message: &'static str,
) -> Result<reqwest::Response> {
    request_builder.send().await.map_err(|err| Error::Request {
        fallback_message,
        description: err.to_string().into(),
    })
}

/// Deserialize a success response, or turn an error response into Error::Server carrying the
/// server's message (or the fallback message if the body doesn't have one).
async fn read_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
    fallback_message: &'static str,
) -> Result<T> {
    let status_code = response.status();
    if status_code.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| Error::MalformedResponse(err.to_string().into()))
    } else {
        let message = match response.json::<MessageBody>().await {
            Ok(message_body) => message_body.message.into(),
            Err(_) => fallback_message.into(),
        };
        tracing::debug!("HTTP {} from server: {}", status_code, message);
        Err(Error::Server {
            status_code,
            message,
        })
    }
}
