//! 产品数据模型
//!
//! 产品没有固定的 schema：除了 `id`、`name`、`quantity`、`price` 四个必填字段外，
//! 提交中的其它字段原样保留。字段顺序与提交顺序一致。

use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// 客户端提交的原始数据
pub type Payload = Map<String, Value>;

pub const FIELD_ID: &str = "id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_QUANTITY: &str = "quantity";
pub const FIELD_PRICE: &str = "price";

const REQUIRED_FIELDS: [&str; 3] = [FIELD_NAME, FIELD_QUANTITY, FIELD_PRICE];

/// 产品提交校验错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProductError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid data types for fields")]
    InvalidType,
}

/// 已入库的产品
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: u64,
    fields: Map<String, Value>,
}

impl Product {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl Serialize for Product {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// 通过校验、尚未分配 id 的产品
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    name: String,
    quantity: Number,
    price: f64,
    fields: Map<String, Value>,
}

impl NewProduct {
    /// 按顺序校验：先检查必填字段是否齐全，再检查字段类型。
    ///
    /// `quantity` 只接受 JSON 整数（布尔值和 `10.0` 这样的实数都会被拒绝），
    /// `quantity` 必须落在 i64/u64 范围内，超出范围的整数按类型错误处理；
    /// `price` 接受任意 JSON 数字。
    pub fn validate(payload: Payload) -> Result<Self, ProductError> {
        if !REQUIRED_FIELDS.iter().all(|field| payload.contains_key(*field)) {
            return Err(ProductError::MissingFields);
        }

        let name = match payload.get(FIELD_NAME) {
            Some(Value::String(name)) => name.clone(),
            _ => return Err(ProductError::InvalidType),
        };

        let quantity = match payload.get(FIELD_QUANTITY) {
            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => n.clone(),
            _ => return Err(ProductError::InvalidType),
        };

        let price = payload
            .get(FIELD_PRICE)
            .and_then(Value::as_f64)
            .ok_or(ProductError::InvalidType)?;

        Ok(Self {
            name,
            quantity,
            price,
            fields: payload,
        })
    }

    /// 生成最终记录：保留全部提交字段，覆写必填字段为规范形式，再写入 `id`。
    ///
    /// 提交中已有 `id` 键时保持其位置，否则追加在末尾。
    pub fn into_product(self, id: u64) -> Product {
        let mut fields = self.fields;

        fields.insert(FIELD_NAME.to_string(), Value::String(self.name));
        fields.insert(FIELD_QUANTITY.to_string(), Value::Number(self.quantity));
        // JSON 中不会出现 NaN/Infinity，from_f64 对有限值总是成功
        let price = Number::from_f64(self.price).map_or(Value::Null, Value::Number);
        fields.insert(FIELD_PRICE.to_string(), price);
        fields.insert(FIELD_ID.to_string(), Value::from(id));

        Product { id, fields }
    }
}
