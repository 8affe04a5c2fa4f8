//! Contact persistence backends.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::domain::{Direction, Line, StationCode};

use super::record::Contact;

/// Errors from a contact store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file does not hold valid contact JSON.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A stored record holds a token the domain no longer accepts.
    #[error("corrupt record for {phone}: {message}")]
    Corrupt { phone: String, message: String },
}

/// Persistence seam for contact records.
///
/// `fetch` returns `None` for an unknown number; `delete` on an unknown
/// number is a no-op. Implementations must be safe to share across request
/// handlers.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Look up the record for a phone number.
    async fn fetch(&self, phone: &str) -> Result<Option<Contact>, StoreError>;

    /// Insert or replace a record, keyed by its phone number.
    async fn save(&self, contact: &Contact) -> Result<(), StoreError>;

    /// Remove the record for a phone number, if any.
    async fn delete(&self, phone: &str) -> Result<(), StoreError>;
}

/// In-memory contact store.
///
/// Records vanish on restart; useful for tests and throwaway deployments.
#[derive(Default)]
pub struct MemoryContactStore {
    contacts: RwLock<HashMap<String, Contact>>,
}

impl MemoryContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn fetch(&self, phone: &str) -> Result<Option<Contact>, StoreError> {
        let contacts = self.contacts.read().await;
        Ok(contacts.get(phone).cloned())
    }

    async fn save(&self, contact: &Contact) -> Result<(), StoreError> {
        let mut contacts = self.contacts.write().await;
        contacts.insert(contact.phone.clone(), contact.clone());
        Ok(())
    }

    async fn delete(&self, phone: &str) -> Result<(), StoreError> {
        let mut contacts = self.contacts.write().await;
        contacts.remove(phone);
        Ok(())
    }
}

/// Stored form of a contact: tokens as the rider texted them.
#[derive(Debug, Serialize, Deserialize)]
struct ContactDto {
    phone: String,
    station: Option<String>,
    direction: Option<String>,
    line: Option<String>,
    home: Option<String>,
}

impl From<&Contact> for ContactDto {
    fn from(contact: &Contact) -> Self {
        ContactDto {
            phone: contact.phone.clone(),
            station: contact.station.map(|s| s.as_str().to_string()),
            direction: contact.direction.map(|d| d.as_str().to_string()),
            line: contact.line.map(|l| l.as_str().to_string()),
            home: contact.home.map(|s| s.as_str().to_string()),
        }
    }
}

impl ContactDto {
    fn into_contact(self) -> Result<Contact, StoreError> {
        let corrupt = |message: String| StoreError::Corrupt {
            phone: self.phone.clone(),
            message,
        };

        let station = self
            .station
            .as_deref()
            .map(StationCode::parse)
            .transpose()
            .map_err(|e| corrupt(e.to_string()))?;
        let direction = self
            .direction
            .as_deref()
            .map(Direction::parse)
            .transpose()
            .map_err(|e| corrupt(e.to_string()))?;
        let line = self
            .line
            .as_deref()
            .map(Line::parse)
            .transpose()
            .map_err(|e| corrupt(e.to_string()))?;
        let home = self
            .home
            .as_deref()
            .map(StationCode::parse)
            .transpose()
            .map_err(|e| corrupt(e.to_string()))?;

        Ok(Contact {
            phone: self.phone,
            station,
            direction,
            line,
            home,
        })
    }
}

/// Contact store backed by a single JSON file.
///
/// The whole file is read once at startup and rewritten on every save and
/// delete. Contact sets are tiny (one record per rider), so the rewrite
/// stays cheap and the file stays human-editable.
#[derive(Debug)]
pub struct FileContactStore {
    path: PathBuf,
    contacts: RwLock<HashMap<String, Contact>>,
}

impl FileContactStore {
    /// Open a store at the given path.
    ///
    /// A missing file starts the store empty; it is created on first save.
    /// An unreadable or corrupt file is an error, not an empty store, so a
    /// bad deploy cannot silently wipe every rider's settings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let contacts = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let dtos: Vec<ContactDto> = serde_json::from_str(&contents)?;
                let mut map = HashMap::with_capacity(dtos.len());
                for dto in dtos {
                    let contact = dto.into_contact()?;
                    map.insert(contact.phone.clone(), contact);
                }
                map
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            contacts: RwLock::new(contacts),
        })
    }

    /// The file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }

    /// Rewrite the backing file from the in-memory map.
    ///
    /// Records are written in phone-number order so the file diffs cleanly.
    fn persist(&self, contacts: &HashMap<String, Contact>) -> Result<(), StoreError> {
        let ordered: BTreeMap<&String, ContactDto> = contacts
            .iter()
            .map(|(phone, contact)| (phone, ContactDto::from(contact)))
            .collect();
        let dtos: Vec<&ContactDto> = ordered.values().collect();

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&dtos)?;
        std::fs::write(&self.path, json)?;

        Ok(())
    }
}

#[async_trait]
impl ContactStore for FileContactStore {
    async fn fetch(&self, phone: &str) -> Result<Option<Contact>, StoreError> {
        let contacts = self.contacts.read().await;
        Ok(contacts.get(phone).cloned())
    }

    async fn save(&self, contact: &Contact) -> Result<(), StoreError> {
        let mut contacts = self.contacts.write().await;
        contacts.insert(contact.phone.clone(), contact.clone());
        self.persist(&contacts)
    }

    async fn delete(&self, phone: &str) -> Result<(), StoreError> {
        let mut contacts = self.contacts.write().await;
        if contacts.remove(phone).is_some() {
            self.persist(&contacts)?;
        }
        Ok(())
    }
}
