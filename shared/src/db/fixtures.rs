//! Test fixtures: file-backed SQLite databases with the shop schema
//!
//! Each fixture lives in its own temporary directory, so every
//! per-operation connection sees the same data.

use std::path::PathBuf;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use tempfile::TempDir;

use super::Database;

pub const SCHEMA: &str = r#"
CREATE TABLE Categories (
    CategoryID INTEGER PRIMARY KEY,
    CategoryName TEXT NOT NULL
);
CREATE TABLE Products (
    ProductID INTEGER PRIMARY KEY,
    ProductName TEXT NOT NULL,
    CategoryID INTEGER NOT NULL REFERENCES Categories(CategoryID)
);
CREATE TABLE Customers (
    CustomerID INTEGER PRIMARY KEY,
    FirstName TEXT NOT NULL,
    LastName TEXT NOT NULL,
    City TEXT NOT NULL
);
CREATE TABLE Orders (
    OrderID INTEGER PRIMARY KEY,
    OrderDate TEXT NOT NULL,
    CustomerID INTEGER NOT NULL REFERENCES Customers(CustomerID),
    TotalAmount REAL NOT NULL
);
CREATE TABLE OrderDetails (
    OrderDetailID INTEGER PRIMARY KEY,
    OrderID INTEGER NOT NULL REFERENCES Orders(OrderID),
    ProductID INTEGER NOT NULL REFERENCES Products(ProductID),
    Quantity INTEGER NOT NULL,
    Subtotal REAL NOT NULL
);
CREATE TABLE Payment (
    PaymentID INTEGER PRIMARY KEY,
    OrderID INTEGER REFERENCES Orders(OrderID),
    PaymentMethod TEXT NOT NULL
);
"#;

/// (CategoryID, CategoryName)
pub const CATEGORIES: &[(i64, &str)] = &[(1, "Electronics"), (2, "Books"), (3, "Clothing")];

/// (ProductID, ProductName, CategoryID)
pub const PRODUCTS: &[(i64, &str, i64)] = &[
    (1, "Laptop", 1),
    (2, "Phone", 1),
    (3, "Headphones", 1),
    (4, "Novel", 2),
    (5, "Cookbook", 2),
    (6, "T-Shirt", 3),
    (7, "Jacket", 3),
];

/// (CustomerID, FirstName, LastName, City)
pub const CUSTOMERS: &[(i64, &str, &str, &str)] = &[
    (1, "Ada", "Lovelace", "London"),
    (2, "Alan", "Turing", "Manchester"),
    (3, "Grace", "Hopper", "New York"),
    (4, "Linus", "Torvalds", "Helsinki"),
    (5, "Ken", "Thompson", "Berkeley"),
    (6, "Barbara", "Liskov", "Boston"),
    (7, "Edsger", "Dijkstra", "Amsterdam"),
];

/// A seeded order: its total is the sum of its line subtotals
pub struct SeedOrder {
    pub order_id: i64,
    pub order_date: &'static str,
    pub customer_id: i64,
    /// (ProductID, Quantity, Subtotal)
    pub lines: &'static [(i64, i64, f64)],
    pub payment_method: &'static str,
}

impl SeedOrder {
    pub fn total_amount(&self) -> f64 {
        self.lines.iter().map(|(_, _, subtotal)| subtotal).sum()
    }
}

pub const ORDERS: &[SeedOrder] = &[
    SeedOrder { order_id: 1, order_date: "2024-01-05 10:00:00", customer_id: 1, lines: &[(1, 1, 1200.0), (4, 2, 30.0)], payment_method: "Card" },
    SeedOrder { order_id: 2, order_date: "2024-01-12 14:30:00", customer_id: 2, lines: &[(2, 1, 800.0), (6, 3, 45.0)], payment_method: "Card" },
    SeedOrder { order_id: 3, order_date: "2024-01-20 09:15:00", customer_id: 3, lines: &[(3, 2, 200.0), (5, 1, 25.0)], payment_method: "Cash" },
    SeedOrder { order_id: 4, order_date: "2024-02-02 11:00:00", customer_id: 4, lines: &[(7, 1, 150.0), (4, 1, 15.0)], payment_method: "Cash" },
    SeedOrder { order_id: 5, order_date: "2024-02-14 16:45:00", customer_id: 5, lines: &[(1, 1, 1150.0), (3, 1, 100.0)], payment_method: "Card" },
    SeedOrder { order_id: 6, order_date: "2024-02-14 16:45:00", customer_id: 6, lines: &[(2, 2, 1600.0), (6, 1, 15.0)], payment_method: "Card" },
    SeedOrder { order_id: 7, order_date: "2024-02-28 08:00:00", customer_id: 7, lines: &[(5, 2, 50.0), (7, 1, 150.0)], payment_method: "PayPal" },
    SeedOrder { order_id: 8, order_date: "2024-03-03 12:00:00", customer_id: 1, lines: &[(6, 4, 60.0), (4, 3, 45.0)], payment_method: "Cash" },
    SeedOrder { order_id: 9, order_date: "2024-03-10 13:20:00", customer_id: 2, lines: &[(3, 1, 100.0), (2, 1, 790.0)], payment_method: "Card" },
    SeedOrder { order_id: 10, order_date: "2024-03-18 19:05:00", customer_id: 3, lines: &[(7, 2, 300.0), (5, 1, 25.0)], payment_method: "PayPal" },
    SeedOrder { order_id: 11, order_date: "2024-03-25 10:40:00", customer_id: 4, lines: &[(1, 1, 1250.0), (6, 2, 30.0)], payment_method: "Card" },
    SeedOrder { order_id: 12, order_date: "2024-03-30 17:55:00", customer_id: 5, lines: &[(4, 1, 15.0), (3, 1, 100.0)], payment_method: "Cash" },
];

/// Temporary SQLite database holding the shop schema
pub struct FixtureDb {
    _dir: TempDir,
    path: PathBuf,
}

impl FixtureDb {
    /// Schema only, no rows
    pub async fn empty() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("shop.db");
        let fixture = Self { _dir: dir, path };
        fixture.execute(SCHEMA).await;
        fixture
    }

    /// Schema plus the `CATEGORIES`/`PRODUCTS`/`CUSTOMERS`/`ORDERS` data set
    pub async fn seeded() -> Self {
        let fixture = Self::empty().await;
        fixture.execute(&seed_sql()).await;
        fixture
    }

    pub fn url(&self) -> String {
        format!("sqlite://{}", self.path.display())
    }

    /// Read-only handle, as the services use it
    pub fn database(&self) -> Database {
        Database::new(&self.url()).expect("fixture url")
    }

    /// Run one or more statements over a writable connection
    pub async fn execute(&self, sql: &str) {
        let mut conn = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
            .connect()
            .await
            .expect("open fixture database");
        sqlx::raw_sql(sql)
            .execute(&mut conn)
            .await
            .expect("execute fixture sql");
        conn.close().await.expect("close fixture database");
    }
}

fn seed_sql() -> String {
    let mut sql = String::new();
    for (id, name) in CATEGORIES {
        sql.push_str(&format!(
            "INSERT INTO Categories (CategoryID, CategoryName) VALUES ({id}, '{name}');\n"
        ));
    }
    for (id, name, category_id) in PRODUCTS {
        sql.push_str(&format!(
            "INSERT INTO Products (ProductID, ProductName, CategoryID) VALUES ({id}, '{name}', {category_id});\n"
        ));
    }
    for (id, first, last, city) in CUSTOMERS {
        sql.push_str(&format!(
            "INSERT INTO Customers (CustomerID, FirstName, LastName, City) VALUES ({id}, '{first}', '{last}', '{city}');\n"
        ));
    }
    for order in ORDERS {
        sql.push_str(&format!(
            "INSERT INTO Orders (OrderID, OrderDate, CustomerID, TotalAmount) VALUES ({}, '{}', {}, {:.2});\n",
            order.order_id,
            order.order_date,
            order.customer_id,
            order.total_amount()
        ));
        for (product_id, quantity, subtotal) in order.lines {
            sql.push_str(&format!(
                "INSERT INTO OrderDetails (OrderID, ProductID, Quantity, Subtotal) VALUES ({}, {product_id}, {quantity}, {subtotal:.2});\n",
                order.order_id
            ));
        }
        sql.push_str(&format!(
            "INSERT INTO Payment (OrderID, PaymentMethod) VALUES ({}, '{}');\n",
            order.order_id, order.payment_method
        ));
    }
    sql
}
