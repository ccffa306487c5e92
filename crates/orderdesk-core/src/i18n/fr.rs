pub(super) const MESSAGES: &[(&str, &str)] = &[
    ("login.title", "Bon retour"),
    ("login.subtitle", "Saisissez votre numéro de téléphone pour continuer"),
    ("login.phoneLabel", "Numéro de téléphone"),
    ("login.continue", "Continuer"),
    ("auth.errors.invalidFormat", "Numéro de téléphone invalide"),
    ("auth.errors.invalidCredentials", "Identifiants invalides"),
    ("auth.errors.inProgress", "Une connexion est déjà en cours"),
    ("auth.errors.storage", "Votre session n'a pas pu être enregistrée"),
    ("dashboard.welcomeBack", "Bon retour, {name}"),
    ("dashboard.recentOrders", "Commandes récentes"),
    ("dashboard.logout", "Déconnexion"),
    ("dashboard.loading", "Chargement…"),
    ("orders.order", "Commande n°{id}"),
    ("orders.total", "Total"),
    ("orders.notFound", "Commande introuvable"),
    ("orders.status.pending", "En attente"),
    ("orders.status.delivered", "Livrée"),
    ("orders.status.cancelled", "Annulée"),
    ("orders.classification.gold", "Or"),
    ("orders.classification.silver", "Argent"),
    ("orders.classification.bronze", "Bronze"),
    ("speech.memberTier", "Vous êtes membre {tier}."),
    ("speech.orderNumber", "Commande numéro {id}"),
    ("speech.placedOn", "passée le {date}"),
    ("speech.statusIs", "le statut est {status}"),
    ("speech.orderDetails", "Détails de la commande {id}"),
    ("speech.containsProducts_one", "Cette commande contient {count} produit."),
    ("speech.containsProducts_other", "Cette commande contient {count} produits."),
    ("speech.totalAmount", "Le montant total est de {amount} dollars"),
    ("speech.productDetails", "{name}, quantité {quantity}, {price} dollars"),
    ("speech.products", "Produits"),
    ("speech.orderCount_one", "Vous avez {count} commande."),
    ("speech.orderCount_other", "Vous avez {count} commandes."),
    ("speech.orderDelivered", "Cette commande a été livrée"),
    ("speech.orderPending", "Cette commande est en attente"),
    ("speech.orderCancelled", "Cette commande a été annulée"),
    ("navigation.dashboard", "Vous êtes sur le tableau de bord"),
    ("navigation.orderDetails", "Vous consultez les détails de la commande"),
    ("navigation.backToDashboard", "Retour au tableau de bord"),
    ("navigation.login", "Vous êtes sur la page de connexion"),
    ("accessibility.speakOrder", "Touchez pour écouter les détails de la commande"),
    ("accessibility.speakProduct", "Touchez pour écouter les informations du produit"),
    ("accessibility.stopSpeaking", "Touchez pour arrêter la lecture"),
    ("language.title", "Langue"),
    ("language.changed", "Langue définie sur {language}"),
];
