//! Join table between vets and specialties

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vet_specialties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vet_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub specialty_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vets::Entity",
        from = "Column::VetId",
        to = "super::vets::Column::Id"
    )]
    Vet,
    #[sea_orm(
        belongs_to = "super::specialties::Entity",
        from = "Column::SpecialtyId",
        to = "super::specialties::Column::Id"
    )]
    Specialty,
}

impl Related<super::vets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vet.def()
    }
}

impl Related<super::specialties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Specialty.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
