use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    #[sea_orm(unique)]
    pub wa_id: String,
    pub state: String,
    pub onboarding_state: Option<String>,
    pub role: String,
    pub class_info: Option<Json>,
    pub school_name: Option<String>,
    pub birthday: Option<Date>,
    pub region: Option<String>,
    pub last_message_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// `updated_at` is always set explicitly by the caller.
impl ActiveModelBehavior for ActiveModel {}
