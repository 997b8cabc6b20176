//! Wire and domain types for the StyleMatch backend API.
//!
//! One module per backend resource family, mirroring the REST surface.

pub mod auth;
pub mod body_profile;
pub mod clothing;
pub mod envelope;
pub mod events;
pub mod history;
pub mod match_task;
pub mod member;
pub mod style_tags;
pub mod upload;

pub use auth::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse};
pub use body_profile::{BodyDerivedMetrics, BodyMeasurements, BodyProfile, BodyShape, GarmentSize, LegRatio};
pub use clothing::{
    ClothingItem, ClothingPage, ClothingSizeData, ClothingStatus, ClothingType,
    CreateClothingRequest, UpdateClothingRequest, UpdateClothingStatusRequest,
};
pub use envelope::{Envelope, Page};
pub use events::{EventPayload, TaskEvent, TaskEventName};
pub use history::{CreateManualHistoryRequest, MatchHistory, MatchHistoryItem, MatchRecordStatus, UpdateHistoryStatusRequest};
pub use match_task::{
    CreateMatchTaskRequest, CreateMatchTaskResponse, MatchResultItem, MatchTaskDetail,
    MatchTaskSummary, OutfitPreview, OutfitRecommendation, TaskStatus,
};
pub use member::{CreateMemberRequest, Member, UpdateMemberRequest};
pub use upload::{UploadBizType, UploadedFile};
