pub(super) const MESSAGES: &[(&str, &str)] = &[
    ("login.title", "Welcome back"),
    ("login.subtitle", "Enter your phone number to continue"),
    ("login.phoneLabel", "Phone number"),
    ("login.continue", "Continue"),
    ("auth.errors.invalidFormat", "Invalid phone number"),
    ("auth.errors.invalidCredentials", "Invalid credentials"),
    ("auth.errors.inProgress", "A sign-in is already in progress"),
    ("auth.errors.storage", "Your session could not be saved"),
    ("dashboard.welcomeBack", "Welcome back, {name}"),
    ("dashboard.recentOrders", "Recent orders"),
    ("dashboard.logout", "Logout"),
    ("dashboard.loading", "Loading…"),
    ("orders.order", "Order #{id}"),
    ("orders.total", "Total"),
    ("orders.notFound", "Order not found"),
    ("orders.status.pending", "Pending"),
    ("orders.status.delivered", "Delivered"),
    ("orders.status.cancelled", "Cancelled"),
    ("orders.classification.gold", "Gold"),
    ("orders.classification.silver", "Silver"),
    ("orders.classification.bronze", "Bronze"),
    ("speech.memberTier", "You are a {tier} member."),
    ("speech.orderNumber", "Order number {id}"),
    ("speech.placedOn", "placed on {date}"),
    ("speech.statusIs", "status is {status}"),
    ("speech.orderDetails", "Order {id} details"),
    ("speech.containsProducts_one", "This order contains {count} product."),
    ("speech.containsProducts_other", "This order contains {count} products."),
    ("speech.totalAmount", "The total amount is {amount} dollars"),
    ("speech.productDetails", "{name}, quantity {quantity}, {price} dollars"),
    ("speech.products", "Products"),
    ("speech.orderCount_one", "You have {count} order."),
    ("speech.orderCount_other", "You have {count} orders."),
    ("speech.orderDelivered", "This order has been delivered"),
    ("speech.orderPending", "This order is pending"),
    ("speech.orderCancelled", "This order has been cancelled"),
    ("navigation.dashboard", "You are on the dashboard page"),
    ("navigation.orderDetails", "You are viewing order details"),
    ("navigation.backToDashboard", "Going back to dashboard"),
    ("navigation.login", "You are on the sign-in page"),
    ("accessibility.speakOrder", "Tap to hear order details"),
    ("accessibility.speakProduct", "Tap to hear product information"),
    ("accessibility.stopSpeaking", "Tap to stop speech"),
    ("language.title", "Language"),
    ("language.changed", "Language set to {language}"),
];
