use crate::{
    model::accommodation::{Category, ReputationBadge},
    server::{
        data::accommodation::AccommodationRepository, model::accommodation::AccommodationParams,
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, fixture::payload};

mod delete;
mod get_by_id;
mod get_by_user;
mod update;
mod update_availability;

/// Validated parameters matching the default payload fixture.
fn valid_params() -> AccommodationParams {
    AccommodationParams::validate(&payload::valid()).unwrap()
}
