pub mod pooled_ring_service;

pub use pooled_ring_service::PooledRingService;
