use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation_extra_service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub reservation_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub extra_service_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reservation::Entity",
        from = "Column::ReservationId",
        to = "super::reservation::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Reservation,
    #[sea_orm(
        belongs_to = "super::extra_service::Entity",
        from = "Column::ExtraServiceId",
        to = "super::extra_service::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ExtraService,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::extra_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExtraService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
