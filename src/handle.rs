use std::sync::atomic::{AtomicU64, Ordering};

pub type HandleId = u64;

/// Opaque reference to an externally owned pixel source.
///
/// The crate never touches pixel data; a handle only tells a
/// [`Surface`](crate::surface::Surface) implementation which texture to
/// sample when drawing. Allocate one per texture and keep the mapping on
/// the surface side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(HandleId);

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(0);

impl Handle {
    pub fn alloc() -> Self {
        Self(NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn id(&self) -> HandleId {
        self.0
    }
}
