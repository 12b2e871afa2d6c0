use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::{StoreError, WishStore};
use crate::types::{NewWish, Wish};

pub struct FileWishStore {
    path: PathBuf,
    // held across the whole read-modify-write of an append
    write_lock: Mutex<()>,
}

impl FileWishStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read(&self) -> Result<Vec<Wish>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::corrupt(self.path.display().to_string(), e))
    }

    async fn write(&self, wishes: &[Wish]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(wishes)
            .map_err(|e| StoreError::corrupt(self.path.display().to_string(), e))?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| StoreError::io(dir, e))?;
        }

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp = PathBuf::from(tmp_name);

        let mut file = tokio::fs::File::create(&tmp)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        file.write_all(&json).await.map_err(|e| StoreError::io(&tmp, e))?;
        file.sync_all().await.map_err(|e| StoreError::io(&tmp, e))?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))
    }
}

/// Epoch millis, bumped past the newest id when the clock has not moved on.
fn next_id(wishes: &[Wish], now_ms: i64) -> i64 {
    match wishes.iter().map(|w| w.id).max() {
        Some(newest) if newest >= now_ms => newest + 1,
        _ => now_ms,
    }
}

#[async_trait]
impl WishStore for FileWishStore {
    async fn append(&self, new: NewWish) -> Result<Wish, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut wishes = self.read().await?;
        let wish = new.with_id(next_id(&wishes, Utc::now().timestamp_millis()));
        wishes.insert(0, wish.clone());
        self.write(&wishes).await?;

        Ok(wish)
    }

    async fn list_all(&self) -> Result<Vec<Wish>, StoreError> {
        let mut wishes = self.read().await?;
        wishes.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(wishes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WishStatus;

    fn wish(id: i64) -> Wish {
        Wish {
            id,
            content: format!("wish {id}"),
            anonymous_id: "a".into(),
            created_at: String::new(),
            status: WishStatus::Pending,
        }
    }

    #[test]
    fn next_id_uses_clock_when_ahead() {
        assert_eq!(next_id(&[], 1_000), 1_000);
        assert_eq!(next_id(&[wish(900), wish(500)], 1_000), 1_000);
    }

    #[test]
    fn next_id_never_repeats() {
        assert_eq!(next_id(&[wish(1_000)], 1_000), 1_001);
        assert_eq!(next_id(&[wish(1_500), wish(1_200)], 1_000), 1_501);
    }
}
