//! 内存产品仓库

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::model::{NewProduct, Payload, Product, ProductError};

#[derive(Debug)]
struct Inventory {
    products: Vec<Product>,
    next_id: u64,
}

/// 产品仓库：持有产品列表与 id 计数器
///
/// 校验、分配 id、计数器递增、追加记录在同一把锁内完成，
/// 并发提交不会得到重复的 id。
#[derive(Debug)]
pub struct ProductStore {
    inner: Mutex<Inventory>,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inventory {
                products: Vec::new(),
                next_id: 1,
            }),
        }
    }

    // 追加是 submit 的最后一步，持锁线程 panic 不会留下半条记录
    fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 校验并保存一条产品；失败时仓库状态不变
    pub fn submit(&self, payload: Payload) -> Result<Product, ProductError> {
        let mut inventory = self.lock();

        let new_product = NewProduct::validate(payload)?;
        let product = new_product.into_product(inventory.next_id);
        inventory.next_id += 1;
        inventory.products.push(product.clone());

        Ok(product)
    }

    /// 按创建顺序返回全部产品
    pub fn list_all(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 下一次成功提交将分配的 id
    pub fn next_id(&self) -> u64 {
        self.lock().next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::thread;

    fn payload(value: Value) -> Payload {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ProductStore::new();
        assert!(store.list_all().is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn test_submit_widget() {
        let store = ProductStore::new();
        let product = store
            .submit(payload(json!({"name": "Widget", "quantity": 10, "price": 19.99})))
            .unwrap();

        assert_eq!(product.id(), 1);
        assert_eq!(product.get("name"), Some(&json!("Widget")));
        assert_eq!(product.get("quantity"), Some(&json!(10)));
        assert_eq!(product.get("price"), Some(&json!(19.99)));
        assert_eq!(store.next_id(), 2);
        assert_eq!(store.list_all(), vec![product]);
    }

    #[test]
    fn test_failed_submit_leaves_state_unchanged() {
        let store = ProductStore::new();
        store
            .submit(payload(json!({"name": "A", "quantity": 1, "price": 1})))
            .unwrap();

        let missing = store.submit(payload(json!({"quantity": 10, "price": 19.99})));
        assert_eq!(missing, Err(ProductError::MissingFields));

        let invalid = store.submit(payload(json!({"name": "Widget", "quantity": "ten", "price": 19.99})));
        assert_eq!(invalid, Err(ProductError::InvalidType));

        assert_eq!(store.len(), 1);
        assert_eq!(store.next_id(), 2);
    }

    #[test]
    fn test_ids_increase_in_creation_order() {
        let store = ProductStore::new();
        let names = ["first", "second", "third"];
        for (i, name) in names.iter().enumerate() {
            let product = store
                .submit(payload(json!({"name": name, "quantity": i, "price": 1.0, "rank": i})))
                .unwrap();
            assert_eq!(product.id(), i as u64 + 1);
        }

        let listed = store.list_all();
        assert_eq!(listed.len(), names.len());
        for (i, product) in listed.iter().enumerate() {
            assert_eq!(product.id(), i as u64 + 1);
            assert_eq!(product.get("name"), Some(&json!(names[i])));
            assert_eq!(product.get("rank"), Some(&json!(i)));
        }
    }

    #[test]
    fn test_concurrent_submits_get_unique_ids() {
        let store = Arc::new(ProductStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..50)
                        .map(|i| {
                            store
                                .submit(payload(json!({
                                    "name": format!("p-{t}-{i}"),
                                    "quantity": i,
                                    "price": 0.5
                                })))
                                .unwrap()
                                .id()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();

        assert_eq!(ids, (1..=400).collect::<Vec<u64>>());
        assert_eq!(store.next_id(), 401);

        let listed: Vec<u64> = store.list_all().iter().map(Product::id).collect();
        assert!(listed.windows(2).all(|w| w[0] < w[1]));
    }
}
