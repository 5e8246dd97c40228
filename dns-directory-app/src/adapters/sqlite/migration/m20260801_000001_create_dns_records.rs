use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DnsRecord::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DnsRecord::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DnsRecord::Name).string().not_null())
                    .col(ColumnDef::new(DnsRecord::Type).string().not_null())
                    .col(ColumnDef::new(DnsRecord::Value).string().not_null())
                    .col(ColumnDef::new(DnsRecord::Ttl).big_integer().not_null())
                    .col(ColumnDef::new(DnsRecord::CreatedAt).string().not_null())
                    .col(ColumnDef::new(DnsRecord::UpdatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        // One record per (name, type)
        manager
            .create_index(
                Index::create()
                    .name("idx_dns_records_name_type")
                    .table(DnsRecord::Table)
                    .col(DnsRecord::Name)
                    .col(DnsRecord::Type)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DnsRecord::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DnsRecord {
    #[sea_orm(iden = "dns_records")]
    Table,
    Id,
    Name,
    Type,
    Value,
    Ttl,
    CreatedAt,
    UpdatedAt,
}
