use sea_orm::entity::prelude::*;

/// Identity projection of an application user.
///
/// Accounts are owned by the authentication service; this table only carries
/// the fields party coordination reads. Location is optional until the user
/// registers one.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(column_type = "Decimal(Some((10, 7)))", nullable)]
    pub latitude: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((10, 7)))", nullable)]
    pub longitude: Option<Decimal>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::party_member::Entity")]
    PartyMember,
}

impl Related<super::party_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
