use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_preferences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub allergies: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub cuisine_preferences: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub deficiencies: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub food_preferences: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
