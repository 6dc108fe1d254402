//! Data Transfer Objects
//!
//! DTOs for the HTTP boundary. They decouple wire formats from domain types.

mod ladder_dto;

pub use ladder_dto::{
    LadderDefaultsDto, LadderSummaryDto, LevelDto, OrderCountInput, PlanLadderRequestDto,
    PlanLadderResponseDto,
};
