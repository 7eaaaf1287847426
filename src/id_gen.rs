use std::collections::HashSet;

use log::{debug, warn};
use thiserror::Error;

pub type UniqueId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ID {id} has already been used")]
pub struct DuplicateIdError {
    pub id: UniqueId,
}

/// Gerador de IDs consecutivos e exclusivos.
///
/// IDs também podem vir de fora (por exemplo, estado carregado de uma execução
/// anterior) e ser registrados com [`IdAllocator::register_external`]; a partir
/// daí `issue` nunca vai devolvê-los.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    // -1 => nenhum ID emitido ainda, então o primeiro é 0
    last_issued: i64,
    used: HashSet<UniqueId>,
}

impl IdAllocator {
    pub fn new() -> Self {
        IdAllocator {
            last_issued: -1,
            used: HashSet::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Retorna o menor ID livre a partir de `last_issued + 1`.
    ///
    /// IDs registrados externamente são pulados quando o cursor chega neles,
    /// mas não movem o cursor.
    pub fn issue(&mut self) -> UniqueId {
        let mut candidate = (self.last_issued + 1) as UniqueId;
        while self.used.contains(&candidate) {
            candidate += 1;
        }

        self.last_issued = candidate as i64;
        self.used.insert(candidate);
        debug!("id_gen: issued {}", candidate);

        candidate
    }

    pub fn register_external(&mut self, id: UniqueId) -> Result<(), DuplicateIdError> {
        if !self.used.insert(id) {
            warn!("id_gen: rejected duplicate external id {}", id);
            return Err(DuplicateIdError { id });
        }

        debug!("id_gen: registered external id {}", id);
        Ok(())
    }

    /// Último ID emitido por `issue`, ou `None` se nenhum foi emitido.
    pub fn last_issued(&self) -> Option<UniqueId> {
        if self.last_issued < 0 {
            None
        } else {
            Some(self.last_issued as UniqueId)
        }
    }

    pub fn is_used(&self, id: UniqueId) -> bool {
        self.used.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
