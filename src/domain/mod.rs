// Domain layer: entity records and the traits the storage layer is generic over.

pub mod model;
pub mod ports;
