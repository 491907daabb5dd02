/// Product listing page with four products; the last one is unrated.
pub const PRODUCT_PAGE: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Our Products</title>
</head>
<body>
    <div class="header">
        <h1>Welcome to Our Store!</h1>
        <p>Discover our amazing products.</p>
    </div>

    <div class="product-list">
        <div class="product-item" id="product-101">
            <h2 class="product-name">Laptop Pro X</h2>
            <p class="product-price">Price: $1200.99</p>
            <div class="product-rating">Rating: 4.5/5</div>
            <span class="availability">In Stock</span>
        </div>

        <div class="product-item" id="product-102">
            <h2 class="product-name">Wireless Mouse Z</h2>
            <p class="product-price">Price: $25.50</p>
            <div class="product-rating">Rating: 4.0/5</div>
            <span class="availability">Low Stock</span>
        </div>

        <div class="product-item" id="product-103">
            <h2 class="product-name">Ergonomic Keyboard</h2>
            <p class="product-price">Price: $75.00</p>
            <div class="product-rating">Rating: 4.8/5</div>
            <span class="availability">In Stock</span>
        </div>

        <div class="product-item" id="product-104">
            <h2 class="product-name">USB-C Hub Elite</h2>
            <p class="product-price">Price: $49.99</p>
            <div class="product-rating">Rating: Not Rated</div>
            <span class="availability">Out of Stock</span>
        </div>
    </div>

    <div class="footer">
        <p>&copy; 2025 Our Store. All rights reserved.</p>
    </div>
</body>
</html>
"#;
